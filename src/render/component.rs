//! A single component block

use super::connectors::{ConnectorParams, Protrude, draw_connector};
use super::turtle::{Alignment, Canvas, PathOptions};
use super::{LayoutParams, defaults};
use crate::graph::{Component, Connector, Side};
use crate::types::Angle;

/// Outline `component` as a block whose outbound edge runs along the heading
/// from the current position and whose body lies to the turtle's left.
///
/// The label is written at the block centre. Afterwards the turtle is back at
/// the starting corner, facing along the block's first side edge (the heading
/// plus 90°), exactly where the outline left it.
pub fn draw_component(canvas: &mut Canvas, component: &Component, params: &LayoutParams) {
    let start = canvas.alignment();
    let width = params.component_width * params.unit;
    let height = params.component_height * params.unit;

    canvas.begin_path(
        PathOptions::new()
            .fill(component.fill.clone())
            .color(defaults::STROKE)
            .width(defaults::STROKE_WIDTH),
    );
    draw_edge(canvas, component.connector(Side::Outbound), Protrude::Out, params);
    canvas.turn_left(90.0).draw(height).turn_left(90.0);
    draw_edge(canvas, component.connector(Side::Inbound), Protrude::In, params);
    canvas.turn_left(90.0).draw(height).close_path();

    let centre = start.position
        + start.heading.direction() * (width / 2.0)
        + (start.heading - Angle::QUARTER).direction() * (height / 2.0);
    canvas
        .align_at(Alignment {
            position: centre,
            heading: start.heading,
        })
        .text(&component.name);

    canvas.align_at(Alignment {
        position: start.position,
        heading: start.heading - Angle::degrees(270.0),
    });
}

/// One long edge: the connector, or a straight run when there is none.
fn draw_edge(
    canvas: &mut Canvas,
    connector: Option<Connector>,
    protrude: Protrude,
    params: &LayoutParams,
) {
    match connector {
        Some(connector) => {
            let connector_params = ConnectorParams {
                unit: params.unit,
                protrude,
                pad: params.connector_padding(),
            };
            draw_connector(canvas, connector, &connector_params);
        }
        None => {
            canvas.draw(params.component_width * params.unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Connector::*;
    use crate::types::SvgUnit;
    use glam::dvec2;

    fn component(inbound: &[Connector], outbound: &[Connector]) -> Component {
        Component {
            name: "fetch".to_string(),
            fill: "yellow".to_string(),
            inbound: inbound.to_vec(),
            outbound: outbound.to_vec(),
        }
    }

    #[test]
    fn test_plain_block() {
        let mut canvas = Canvas::new();
        draw_component(&mut canvas, &component(&[], &[]), &LayoutParams::default());

        let svg = canvas.as_svg(SvgUnit::Px).unwrap();
        insta::assert_snapshot!(svg, @r#"<svg xmlns="http://www.w3.org/2000/svg" width="164px" height="84px" viewBox="-2 -82 164 84" vector-effect="non-scaling-stroke"><path fill="yellow" stroke="black" stroke-width="4" stroke-linejoin="round" stroke-linecap="round" stroke-dasharray="none" d="M 0,0 L 160,0 L 160,-80 L 0,-80 L 0,0 Z"/><text font-size="1.2em" transform="rotate(0, 80, -40)" dominant-baseline="middle" text-anchor="middle" x="80" y="-40">fetch</text></svg>"#);
    }

    #[test]
    fn test_turtle_returns_to_corner() {
        let mut canvas = Canvas::new();
        canvas.move_to((5.0, 7.0)).turn_to(30.0);
        draw_component(&mut canvas, &component(&[Triangle], &[Semicircle]), &LayoutParams::default());

        assert!((canvas.position() - dvec2(5.0, 7.0)).length() < 1e-9);
        assert_eq!(canvas.heading(), Angle::degrees(30.0 - 270.0));
        assert!(!canvas.is_path_open());
    }

    #[test]
    fn test_connectors_extend_the_outline() {
        let mut canvas = Canvas::new();
        draw_component(&mut canvas, &component(&[], &[Rectangle]), &LayoutParams::default());
        let limits = canvas.limits();
        assert!((limits.max.y - 22.0).abs() < 1e-9);
        assert!((limits.min.y + 82.0).abs() < 1e-9);
    }
}
