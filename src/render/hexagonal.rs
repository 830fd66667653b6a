//! Hexagonal assembly diagram
//!
//! The hub is a regular polygon with `2n` sides. Walking it counter-clockwise
//! on screen, the first `n` sides face the outbound neighbours and the next
//! `n` the inbound ones. Each neighbour block sits flush against its side.

use super::component::draw_component;
use super::connectors::{ConnectorParams, Protrude, draw_connector};
use super::geometry::apothem;
use super::turtle::{Alignment, Canvas, PathOptions};
use super::{Diagram, LayoutParams, defaults};
use crate::errors::RenderError;
use crate::graph::{Component, HexagonalAssembly, Side};
use crate::types::Angle;

/// One side of the hub outline.
struct HubSide<'a> {
    neighbour: Option<&'a Component>,
    /// Hub-facing side of the neighbour
    facing: Side,
    protrude: Protrude,
}

impl HexagonalAssembly {
    fn hub_sides(&self) -> Vec<HubSide<'_>> {
        let n = self.sides();
        let outbound = (0..n).map(|i| HubSide {
            neighbour: self.outbound().get(i),
            facing: Side::Inbound,
            protrude: Protrude::Out,
        });
        let inbound = (0..n).map(|i| HubSide {
            neighbour: self.inbound().get(i),
            facing: Side::Outbound,
            protrude: Protrude::In,
        });
        outbound.chain(inbound).collect()
    }
}

impl Diagram for HexagonalAssembly {
    fn draw(&self, canvas: &mut Canvas, params: &LayoutParams) -> Result<(), RenderError> {
        let n = self.sides();
        let edge_angle = 180.0 / n as f64;
        let unit = params.unit;
        let edge_padding = params.edge_padding() * unit;
        let side_length = (2.0 * params.edge_padding() + params.component_width) * unit;
        let sides = self.hub_sides();

        canvas.begin_path(
            PathOptions::new()
                .fill(self.hub().fill.clone())
                .color(defaults::STROKE)
                .width(defaults::STROKE_WIDTH),
        );
        canvas.turn_right(edge_angle);
        if n % 2 == 0 {
            // keeps a vertex on the horizontal axis
            canvas.turn_right(edge_angle / 2.0);
        }
        let origin = canvas.alignment();

        for side in &sides {
            let Some(neighbour) = side.neighbour else {
                canvas.draw(side_length).turn_left(edge_angle);
                continue;
            };
            let connector =
                neighbour
                    .connector(side.facing)
                    .ok_or_else(|| RenderError::MissingConnector {
                        component: neighbour.name.clone(),
                        side: side.facing,
                    })?;
            canvas.draw(edge_padding);
            draw_connector(
                canvas,
                connector,
                &ConnectorParams {
                    unit,
                    protrude: side.protrude,
                    pad: params.connector_padding(),
                },
            );
            canvas.draw(edge_padding).turn_left(edge_angle);
        }
        canvas.close_path();

        let after_outline = canvas.alignment();
        let centre = origin.position
            + origin.heading.direction() * (side_length / 2.0)
            + (origin.heading - Angle::QUARTER).direction() * apothem(side_length, 2 * n);
        canvas
            .align_at(Alignment {
                position: centre,
                heading: Angle::ZERO,
            })
            .text(&self.hub().name);
        canvas.align_at(after_outline);

        crate::log::debug!(
            hub = %self.hub().name,
            sides = 2 * n,
            inbound = self.inbound().len(),
            outbound = self.outbound().len(),
            "drawing hexagonal assembly"
        );

        let width = params.component_width * unit;
        let height = params.component_height * unit;
        for side in &sides {
            let Some(neighbour) = side.neighbour else {
                canvas.move_by(side_length).turn_left(edge_angle);
                continue;
            };
            canvas.move_by(edge_padding);
            match side.protrude {
                Protrude::Out => {
                    canvas.turn_right(90.0).move_by(height).turn_left(90.0);
                    draw_component(canvas, neighbour, params);
                    canvas
                        .turn_left(90.0)
                        .move_by(width)
                        .turn_left(90.0)
                        .move_by(height)
                        .turn_right(90.0);
                }
                Protrude::In => {
                    canvas.move_by(width).turn_left(180.0);
                    draw_component(canvas, neighbour, params);
                    canvas.turn_right(90.0);
                }
            }
            canvas.move_by(edge_padding).turn_left(edge_angle);
        }
        Ok(())
    }
}
