//! SVG rendering for component assemblies
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `turtle`: the `Canvas` cursor that traces paths and labels
//! - `geometry`: elliptical arc math for the turtle
//! - `svg`: root element generation and XML escaping
//! - `connectors`: connector outlines
//! - `component`, `stacked`, `hexagonal`: the diagram renderers

pub mod component;
pub mod connectors;
pub mod defaults;
pub mod geometry;
mod hexagonal;
mod stacked;
pub mod svg;
pub mod turtle;

// Re-export commonly used items
pub use connectors::{ConnectorParams, Protrude, draw_connector};
pub use svg::SvgOptions;
pub use turtle::{Alignment, Canvas, LineCap, LineJoin, Lineature, PathOptions, PenStyle};

use enum_dispatch::enum_dispatch;

use crate::errors::RenderError;
use crate::graph::{HexagonalAssembly, StackedAssembly};
use crate::types::NumericError;

/// Sizes of a diagram. `component_width` and `component_height` are in units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub unit: f64,
    pub component_width: f64,
    pub component_height: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            unit: defaults::UNIT,
            component_width: defaults::COMPONENT_WIDTH,
            component_height: defaults::COMPONENT_HEIGHT,
        }
    }
}

impl LayoutParams {
    pub fn new(unit: f64, component_width: f64, component_height: f64) -> Self {
        Self {
            unit,
            component_width,
            component_height,
        }
    }

    /// Every size must be finite and positive.
    pub fn validate(&self) -> Result<(), RenderError> {
        for (name, value) in [
            ("unit", self.unit),
            ("component_width", self.component_width),
            ("component_height", self.component_height),
        ] {
            NumericError::check_positive(value)
                .map_err(|_| RenderError::InvalidLayout { name, value })?;
        }
        Ok(())
    }

    /// Straight run on either side of a connector so that it sits centred on
    /// a component edge, in units.
    pub fn connector_padding(&self) -> f64 {
        (self.component_width - defaults::CONNECTOR_LENGTH) / 2.0
    }

    /// Straight run at either end of a hub side, in units.
    pub fn edge_padding(&self) -> f64 {
        self.component_width * defaults::HUB_EDGE_PADDING
    }
}

/// Something that can be drawn onto a canvas.
#[enum_dispatch]
pub trait Diagram {
    fn draw(&self, canvas: &mut Canvas, params: &LayoutParams) -> Result<(), RenderError>;
}

/// Either projection of an assembly, ready to render.
#[enum_dispatch(Diagram)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyDiagram {
    StackedAssembly,
    HexagonalAssembly,
}

/// Draw `diagram` on a fresh canvas and serialize it.
///
/// The canvas is returned alongside the document so callers can inspect its
/// limits or keep drawing.
pub fn render<D: Diagram>(
    diagram: &D,
    params: &LayoutParams,
    options: &SvgOptions,
) -> Result<(String, Canvas), RenderError> {
    params.validate()?;
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas, params)?;
    let svg = canvas.to_svg(options)?;
    Ok((svg, canvas))
}
