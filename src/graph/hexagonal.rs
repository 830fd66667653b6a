//! Radial projection: a hub surrounded by the components it connects to

use super::{AssemblySubgraph, Component, Side};
use crate::errors::GraphError;
use crate::render::defaults;

/// A hub with its inbound and outbound neighbours.
///
/// `inbound` holds the sources of edges into the hub and `outbound` the
/// targets of edges out of it, both in connection order. The hub itself never
/// appears in either list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexagonalAssembly {
    assembly: String,
    hub: Component,
    inbound: Vec<Component>,
    outbound: Vec<Component>,
}

impl HexagonalAssembly {
    pub fn from_subgraph(subgraph: &AssemblySubgraph) -> Result<Self, GraphError> {
        let Some(hub_name) = subgraph.hub() else {
            return Err(GraphError::NoUniqueHub {
                assembly: subgraph.assembly().to_string(),
                candidates: subgraph
                    .hub_candidates()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });
        };
        crate::log::debug!(assembly = subgraph.assembly(), hub = hub_name, "selected hub");

        let hub = resolve(subgraph, hub_name)?;

        let inbound = subgraph
            .in_edges(hub_name)
            .filter(|edge| edge.source != hub_name)
            .map(|edge| resolve_neighbour(subgraph, &edge.source))
            .collect::<Result<Vec<_>, _>>()?;

        let outbound = subgraph
            .out_edges(hub_name)
            .filter(|edge| edge.target != hub_name)
            .map(|edge| resolve_neighbour(subgraph, &edge.target))
            .collect::<Result<Vec<_>, _>>()?;

        for neighbour in &inbound {
            let fits = neighbour
                .connector(Side::Outbound)
                .is_some_and(|connector| hub.inbound.contains(&connector));
            if !fits {
                return Err(GraphError::Incompatible {
                    source_component: neighbour.name.clone(),
                    outbound: neighbour.outbound.clone(),
                    target_component: hub.name.clone(),
                    inbound: hub.inbound.clone(),
                });
            }
        }

        for neighbour in &outbound {
            let fits = neighbour
                .connector(Side::Inbound)
                .is_some_and(|connector| hub.outbound.contains(&connector));
            if !fits {
                return Err(GraphError::Incompatible {
                    source_component: hub.name.clone(),
                    outbound: hub.outbound.clone(),
                    target_component: neighbour.name.clone(),
                    inbound: neighbour.inbound.clone(),
                });
            }
        }

        Ok(HexagonalAssembly {
            assembly: subgraph.assembly().to_string(),
            hub,
            inbound,
            outbound,
        })
    }

    /// Assemble a hexagon from parts without checking them against each other.
    pub fn new(
        assembly: impl Into<String>,
        hub: Component,
        inbound: Vec<Component>,
        outbound: Vec<Component>,
    ) -> Self {
        HexagonalAssembly {
            assembly: assembly.into(),
            hub,
            inbound,
            outbound,
        }
    }

    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    pub fn hub(&self) -> &Component {
        &self.hub
    }

    /// Components connected into the hub.
    pub fn inbound(&self) -> &[Component] {
        &self.inbound
    }

    /// Components the hub connects out to.
    pub fn outbound(&self) -> &[Component] {
        &self.outbound
    }

    /// Polygon half-order: sides per half of the hub outline.
    pub fn sides(&self) -> usize {
        defaults::HUB_MIN_SIDES
            .max(self.inbound.len())
            .max(self.outbound.len())
    }
}

fn resolve(subgraph: &AssemblySubgraph, name: &str) -> Result<Component, GraphError> {
    let attributes = subgraph.attributes(name).cloned().unwrap_or_default();
    Component::resolve(name, &attributes)
}

fn resolve_neighbour(subgraph: &AssemblySubgraph, name: &str) -> Result<Component, GraphError> {
    let component = resolve(subgraph, name)?;
    component.ensure_single_connectors()?;
    Ok(component)
}
