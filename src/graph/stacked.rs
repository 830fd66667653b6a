//! Linear projection: an assembly drawn as a stack of blocks

use super::{AssemblySubgraph, Component, Side};
use crate::errors::GraphError;

/// Components of one assembly in topological order.
///
/// Every member carries at most one connector per side, and each member's
/// outbound connector matches the inbound connector of the member after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedAssembly {
    assembly: String,
    components: Vec<Component>,
}

impl StackedAssembly {
    pub fn from_subgraph(subgraph: &AssemblySubgraph) -> Result<Self, GraphError> {
        let order = subgraph.topological_order()?;

        let mut components = Vec::with_capacity(order.len());
        for name in order {
            let attributes = subgraph.attributes(name).cloned().unwrap_or_default();
            let component = Component::resolve(name, &attributes)?;
            component.ensure_single_connectors()?;
            components.push(component);
        }

        for pair in components.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if previous.connector(Side::Outbound) != current.connector(Side::Inbound) {
                return Err(GraphError::Incompatible {
                    source_component: previous.name.clone(),
                    outbound: previous.outbound.clone(),
                    target_component: current.name.clone(),
                    inbound: current.inbound.clone(),
                });
            }
        }

        Ok(StackedAssembly {
            assembly: subgraph.assembly().to_string(),
            components,
        })
    }

    /// Assemble a stack from components without checking their connectors.
    pub fn new(assembly: impl Into<String>, components: Vec<Component>) -> Self {
        StackedAssembly {
            assembly: assembly.into(),
            components,
        }
    }

    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    /// Members from top to bottom.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
