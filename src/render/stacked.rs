//! Stacked assembly diagram

use super::component::draw_component;
use super::turtle::Canvas;
use super::{Diagram, LayoutParams};
use crate::errors::RenderError;
use crate::graph::StackedAssembly;

impl Diagram for StackedAssembly {
    /// Blocks top to bottom; each one's outbound edge meets the inbound edge
    /// of the block below.
    fn draw(&self, canvas: &mut Canvas, params: &LayoutParams) -> Result<(), RenderError> {
        for (index, component) in self.components().iter().enumerate() {
            if index > 0 {
                canvas
                    .move_by(params.component_height * params.unit)
                    .turn_left(90.0);
            }
            draw_component(canvas, component, params);
        }
        Ok(())
    }
}
