//! Render component assemblies as SVG.
//!
//! A [`ComponentGraph`] holds named components and directed connections
//! tagged with an assembly (`production`, `test`, ...). One assembly is
//! projected as a stack or as a hexagon around its hub, then drawn with a
//! turtle [`Canvas`] whose connector notches match between neighbours.
//!
//! ```
//! use assembly_svg::{ComponentGraph, Connector, LayoutParams, SvgUnit, render_stacked};
//!
//! let mut graph = ComponentGraph::new();
//! graph
//!     .add_component("spa", "lightblue", [], [Connector::Semicircle])
//!     .add_component("fetch", "yellow", [Connector::Semicircle], [])
//!     .add_connection("spa", "fetch", "production");
//!
//! let svg = render_stacked(&graph, "production", &LayoutParams::default(), SvgUnit::Px)?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), assembly_svg::Error>(())
//! ```

pub mod errors;
pub mod graph;
mod log;
pub mod parse;
pub mod render;
pub mod types;

pub use errors::{Error, GraphError, LoadError, RenderError};
pub use graph::{
    AssemblySubgraph, Component, ComponentAttributes, ComponentGraph, Connection, Connector,
    HexagonalAssembly, Layout, Side, StackedAssembly,
};
pub use parse::{AssemblyParser, parse, parse_named};
pub use render::{AssemblyDiagram, Canvas, Diagram, LayoutParams, SvgOptions, render};
pub use types::SvgUnit;

/// Render one assembly of `graph` as a stack.
pub fn render_stacked(
    graph: &ComponentGraph,
    assembly: &str,
    params: &LayoutParams,
    unit: SvgUnit,
) -> Result<String, Error> {
    render_assembly(graph, assembly, Layout::Stacked, params, &SvgOptions::new(unit))
}

/// Render one assembly of `graph` as a hub with its neighbours around it.
pub fn render_hexagonal(
    graph: &ComponentGraph,
    assembly: &str,
    params: &LayoutParams,
    unit: SvgUnit,
) -> Result<String, Error> {
    render_assembly(graph, assembly, Layout::Hexagonal, params, &SvgOptions::new(unit))
}

/// Project one assembly with `layout` and render it with full control over
/// the document.
pub fn render_assembly(
    graph: &ComponentGraph,
    assembly: &str,
    layout: Layout,
    params: &LayoutParams,
    options: &SvgOptions,
) -> Result<String, Error> {
    let diagram = graph.project(assembly, layout)?;
    let (svg, _) = render(&diagram, params, options)?;
    Ok(svg)
}
