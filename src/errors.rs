//! Error types with rich diagnostics using miette
//!
//! Graph and render errors carry the names involved; loader errors carry
//! source spans for snippet-style reports.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::graph::{Connector, Side};

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

/// Renders a connector list as `a|b|c`, or `none` when empty.
pub(crate) fn connector_list_label(connectors: &[Connector]) -> String {
    if connectors.is_empty() {
        return "none".to_string();
    }
    connectors
        .iter()
        .map(Connector::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

// ============================================================================
// Graph Errors
// ============================================================================

/// Errors raised while projecting a component graph onto one assembly
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Component {component} is missing the {side} attribute. Is it defined?")]
    #[diagnostic(
        code(assembly::graph::missing_attribute),
        help("declare the component with both inbound and outbound connector lists")
    )]
    MissingAttribute { component: String, side: Side },

    #[error("Component {component} has {} {side} connectors ({}), expected at most one", .connectors.len(), connector_list_label(.connectors))]
    #[diagnostic(code(assembly::graph::too_many_connectors))]
    TooManyConnectors {
        component: String,
        side: Side,
        connectors: Vec<Connector>,
    },

    #[error("Component {source_component}--{}--> is incompatible with --{}-->{target_component}", connector_list_label(.outbound), connector_list_label(.inbound))]
    #[diagnostic(
        code(assembly::graph::incompatible),
        help("the outbound connector of a component must match the inbound connector of the next one")
    )]
    Incompatible {
        source_component: String,
        outbound: Vec<Connector>,
        target_component: String,
        inbound: Vec<Connector>,
    },

    #[error("No unique hub could be determined for assembly {assembly}: {} components have more than two connections", .candidates.len())]
    #[diagnostic(
        code(assembly::graph::no_unique_hub),
        help("a hexagonal assembly needs exactly one component with more than two connections")
    )]
    NoUniqueHub {
        assembly: String,
        candidates: Vec<String>,
    },

    #[error("Assembly {assembly} contains a cycle through {}", .components.join(", "))]
    #[diagnostic(code(assembly::graph::cycle))]
    Cycle {
        assembly: String,
        components: Vec<String>,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur during rendering and serialization
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid {axis} range: {min} to {max}")]
    #[diagnostic(
        code(assembly::render::invalid_range),
        help("the minimum bound must not exceed the maximum bound")
    )]
    InvalidRange { axis: char, min: f64, max: f64 },

    #[error("invalid layout parameter {name}: {value}")]
    #[diagnostic(
        code(assembly::render::invalid_layout),
        help("layout parameters must be finite and positive")
    )]
    InvalidLayout { name: &'static str, value: f64 },

    #[error("No {side} connector for component {component}")]
    #[diagnostic(code(assembly::render::missing_connector))]
    MissingConnector { component: String, side: Side },
}

// ============================================================================
// Load Errors
// ============================================================================

/// Errors that occur while loading an assembly description
#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(assembly::parse::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unknown connector: {name}")]
    #[diagnostic(
        code(assembly::parse::unknown_connector),
        help("expected one of rectangle, triangle, semicircle, stairs")
    )]
    UnknownConnector {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a connector")]
        span: SourceSpan,
    },
}

// ============================================================================
// Crate-Level Error
// ============================================================================

/// Any error the crate-level helpers can return
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),
}
