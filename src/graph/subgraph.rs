//! Single-assembly view of the component graph

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};

use super::{ComponentAttributes, Connection};
use crate::errors::GraphError;

/// Components taking part in more than this many connections are hub candidates.
const HUB_DEGREE: usize = 2;

/// The connections tagged with one assembly, plus their endpoints.
///
/// Built fresh on every projection; it never aliases the parent graph.
#[derive(Debug, Clone, Default)]
pub struct AssemblySubgraph {
    assembly: String,
    nodes: IndexMap<String, ComponentAttributes>,
    edges: Vec<Connection>,
}

impl AssemblySubgraph {
    pub(crate) fn reduce(
        assembly: &str,
        components: &IndexMap<String, ComponentAttributes>,
        connections: &IndexSet<Connection>,
    ) -> Self {
        let mut nodes = IndexMap::new();
        let mut edges = Vec::new();

        for connection in connections.iter().filter(|c| c.assembly == assembly) {
            for name in [&connection.source, &connection.target] {
                if !nodes.contains_key(name) {
                    let attributes = components.get(name).cloned().unwrap_or_default();
                    nodes.insert(name.clone(), attributes);
                }
            }
            edges.push(connection.clone());
        }

        crate::log::debug!(
            assembly,
            nodes = nodes.len(),
            edges = edges.len(),
            "reduced assembly subgraph"
        );

        AssemblySubgraph {
            assembly: assembly.to_string(),
            nodes,
            edges,
        }
    }

    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Node names in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn attributes(&self, name: &str) -> Option<&ComponentAttributes> {
        self.nodes.get(name)
    }

    pub fn edges(&self) -> &[Connection] {
        &self.edges
    }

    /// Edges whose target is `name`, in insertion order.
    pub fn in_edges<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Connection> {
        self.edges.iter().filter(move |edge| edge.target == name)
    }

    /// Edges whose source is `name`, in insertion order.
    pub fn out_edges<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Connection> {
        self.edges.iter().filter(move |edge| edge.source == name)
    }

    /// In-degree plus out-degree within this assembly. A self-loop counts twice.
    pub fn degree(&self, name: &str) -> usize {
        self.in_edges(name).count() + self.out_edges(name).count()
    }

    /// Every node with more than two connections, in node order.
    pub fn hub_candidates(&self) -> Vec<&str> {
        self.nodes()
            .filter(|name| self.degree(name) > HUB_DEGREE)
            .collect()
    }

    /// The unique hub candidate, if there is exactly one.
    pub fn hub(&self) -> Option<&str> {
        match self.hub_candidates().as_slice() {
            [hub] => Some(*hub),
            _ => None,
        }
    }

    /// Kahn's algorithm; ready nodes are taken in node order.
    pub fn topological_order(&self) -> Result<Vec<&str>, GraphError> {
        let mut in_degree: IndexMap<&str, usize> =
            self.nodes().map(|name| (name, 0)).collect();
        for edge in &self.edges {
            if let Some(count) = in_degree.get_mut(edge.target.as_str()) {
                *count += 1;
            }
        }

        let mut ready: VecDeque<&str> = in_degree
            .iter()
            .filter(|&(_, &count)| count == 0)
            .map(|(&name, _)| name)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(name) = ready.pop_front() {
            order.push(name);
            for edge in self.out_edges(name) {
                if let Some(count) = in_degree.get_mut(edge.target.as_str()) {
                    *count -= 1;
                    if *count == 0 {
                        ready.push_back(edge.target.as_str());
                    }
                }
            }
        }

        if order.len() < self.nodes.len() {
            let components = self
                .nodes()
                .filter(|name| !order.contains(name))
                .map(str::to_string)
                .collect();
            return Err(GraphError::Cycle {
                assembly: self.assembly.clone(),
                components,
            });
        }

        crate::log::debug!(assembly = %self.assembly, order = ?order, "topological order");
        Ok(order)
    }
}
