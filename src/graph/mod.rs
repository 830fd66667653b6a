//! Component graph
//!
//! The graph owns every component and every assembly-tagged connection. A
//! render request projects it onto one assembly:
//! - `subgraph`: reduction to the connections of one assembly
//! - `stacked`: topological ordering into a stack
//! - `hexagonal`: hub detection and inbound/outbound grouping
//!
//! Nodes and edges keep insertion order, which makes every projection
//! deterministic.

mod connector;
mod hexagonal;
mod stacked;
mod subgraph;

pub use connector::{Connector, Side, UnknownConnector};
pub use hexagonal::HexagonalAssembly;
pub use stacked::StackedAssembly;
pub use subgraph::AssemblySubgraph;

use std::fmt;
use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};

use crate::errors::GraphError;
use crate::render::AssemblyDiagram;
use crate::render::defaults;

/// Attributes of a component. Each one stays `None` until something sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentAttributes {
    pub fill: Option<String>,
    pub inbound: Option<Vec<Connector>>,
    pub outbound: Option<Vec<Connector>>,
}

impl ComponentAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_inbound(mut self, connectors: impl IntoIterator<Item = Connector>) -> Self {
        self.inbound = Some(connectors.into_iter().collect());
        self
    }

    pub fn with_outbound(mut self, connectors: impl IntoIterator<Item = Connector>) -> Self {
        self.outbound = Some(connectors.into_iter().collect());
        self
    }

    /// Take every attribute `other` defines; keep the rest.
    pub fn merge(&mut self, other: ComponentAttributes) {
        if other.fill.is_some() {
            self.fill = other.fill;
        }
        if other.inbound.is_some() {
            self.inbound = other.inbound;
        }
        if other.outbound.is_some() {
            self.outbound = other.outbound;
        }
    }

    /// The connector list on one side, if it was ever defined.
    pub fn connectors(&self, side: Side) -> Option<&[Connector]> {
        match side {
            Side::Inbound => self.inbound.as_deref(),
            Side::Outbound => self.outbound.as_deref(),
        }
    }
}

/// A component resolved for rendering: every attribute is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub fill: String,
    pub inbound: Vec<Connector>,
    pub outbound: Vec<Connector>,
}

impl Component {
    /// Resolve a component from its attributes.
    ///
    /// Fails when either connector list was never defined; the inbound side is
    /// checked first. A missing fill falls back to the default fill.
    pub fn resolve(name: &str, attributes: &ComponentAttributes) -> Result<Component, GraphError> {
        let inbound = Self::required(name, attributes, Side::Inbound)?;
        let outbound = Self::required(name, attributes, Side::Outbound)?;
        Ok(Component {
            name: name.to_string(),
            fill: attributes
                .fill
                .clone()
                .unwrap_or_else(|| defaults::COMPONENT_FILL.to_string()),
            inbound,
            outbound,
        })
    }

    fn required(
        name: &str,
        attributes: &ComponentAttributes,
        side: Side,
    ) -> Result<Vec<Connector>, GraphError> {
        attributes
            .connectors(side)
            .map(<[Connector]>::to_vec)
            .ok_or_else(|| GraphError::MissingAttribute {
                component: name.to_string(),
                side,
            })
    }

    pub fn connectors(&self, side: Side) -> &[Connector] {
        match side {
            Side::Inbound => &self.inbound,
            Side::Outbound => &self.outbound,
        }
    }

    /// The single connector on one side, if any.
    pub fn connector(&self, side: Side) -> Option<Connector> {
        self.connectors(side).first().copied()
    }

    /// Fail if either side lists more than one connector.
    pub fn ensure_single_connectors(&self) -> Result<(), GraphError> {
        for side in [Side::Inbound, Side::Outbound] {
            let connectors = self.connectors(side);
            if connectors.len() > 1 {
                return Err(GraphError::TooManyConnectors {
                    component: self.name.clone(),
                    side,
                    connectors: connectors.to_vec(),
                });
            }
        }
        Ok(())
    }
}

/// A directed, assembly-tagged edge between two components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    pub source: String,
    pub target: String,
    pub assembly: String,
}

impl Connection {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        assembly: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            assembly: assembly.into(),
        }
    }
}

/// Which projection to build for an assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    Stacked,
    Hexagonal,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Stacked => f.write_str("stacked"),
            Layout::Hexagonal => f.write_str("hexagonal"),
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stack" | "stacked" => Ok(Layout::Stacked),
            "hexagon" | "hexagonal" => Ok(Layout::Hexagonal),
            other => Err(format!("unknown layout: {other}")),
        }
    }
}

/// The full multi-assembly graph of components and connections.
#[derive(Debug, Clone, Default)]
pub struct ComponentGraph {
    components: IndexMap<String, ComponentAttributes>,
    connections: IndexSet<Connection>,
}

impl ComponentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component or overwrite all of its attributes.
    pub fn add_component(
        &mut self,
        name: impl Into<String>,
        fill: impl Into<String>,
        inbound: impl IntoIterator<Item = Connector>,
        outbound: impl IntoIterator<Item = Connector>,
    ) -> &mut Self {
        let attributes = ComponentAttributes::new()
            .with_fill(fill)
            .with_inbound(inbound)
            .with_outbound(outbound);
        self.merge_component(name, attributes)
    }

    /// Insert a component or merge the attributes that are set.
    pub fn merge_component(
        &mut self,
        name: impl Into<String>,
        attributes: ComponentAttributes,
    ) -> &mut Self {
        self.components
            .entry(name.into())
            .or_default()
            .merge(attributes);
        self
    }

    /// Insert a connection. Endpoints that are not known yet are created
    /// without attributes; adding the same connection again changes nothing.
    pub fn add_connection(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        assembly: impl Into<String>,
    ) -> &mut Self {
        let connection = Connection::new(source, target, assembly);
        self.components
            .entry(connection.source.clone())
            .or_default();
        self.components
            .entry(connection.target.clone())
            .or_default();
        self.connections.insert(connection);
        self
    }

    pub fn component(&self, name: &str) -> Option<&ComponentAttributes> {
        self.components.get(name)
    }

    pub fn components(&self) -> impl Iterator<Item = (&str, &ComponentAttributes)> {
        self.components
            .iter()
            .map(|(name, attributes)| (name.as_str(), attributes))
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    /// Distinct assembly tags, in the order they first appear.
    pub fn assemblies(&self) -> Vec<&str> {
        let tags: IndexSet<&str> = self
            .connections
            .iter()
            .map(|connection| connection.assembly.as_str())
            .collect();
        tags.into_iter().collect()
    }

    /// Reduce the graph to the connections tagged `assembly` and their endpoints.
    pub fn to_assembly_subgraph(&self, assembly: &str) -> AssemblySubgraph {
        AssemblySubgraph::reduce(assembly, &self.components, &self.connections)
    }

    /// Order the assembly as a stack, validating the connectors between neighbours.
    pub fn to_stacked_assembly(&self, assembly: &str) -> Result<StackedAssembly, GraphError> {
        StackedAssembly::from_subgraph(&self.to_assembly_subgraph(assembly))
    }

    /// Group the assembly around its hub.
    pub fn to_hexagonal_assembly(&self, assembly: &str) -> Result<HexagonalAssembly, GraphError> {
        HexagonalAssembly::from_subgraph(&self.to_assembly_subgraph(assembly))
    }

    /// Build either projection as a renderable diagram.
    pub fn project(&self, assembly: &str, layout: Layout) -> Result<AssemblyDiagram, GraphError> {
        Ok(match layout {
            Layout::Stacked => self.to_stacked_assembly(assembly)?.into(),
            Layout::Hexagonal => self.to_hexagonal_assembly(assembly)?.into(),
        })
    }
}
