//! Connector outlines
//!
//! Each connector is traced from the turtle's position along its heading and
//! fits a slot `4·unit` long and `2·unit` deep. A connector starts and ends
//! with a straight run of `pad` units, so the turtle finishes on its original
//! heading, `(2·pad + 4)·unit` further along.

use std::f64::consts::SQRT_2;
use std::fmt;

use super::defaults::{CONNECTOR_DEPTH, CONNECTOR_LENGTH};
use super::turtle::Canvas;
use crate::graph::Connector;

/// Which side of the direction of travel the shape bulges towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protrude {
    /// Towards the turtle's left, into the component being outlined
    In,
    /// Towards the turtle's right, out of the component
    Out,
}

impl fmt::Display for Protrude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protrude::In => f.write_str("in"),
            Protrude::Out => f.write_str("out"),
        }
    }
}

/// Parameters shared by every connector outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorParams {
    pub unit: f64,
    pub protrude: Protrude,
    /// Straight run before and after the shape, in units
    pub pad: f64,
}

impl ConnectorParams {
    /// Length covered along the heading.
    pub fn span(&self) -> f64 {
        (2.0 * self.pad + CONNECTOR_LENGTH) * self.unit
    }

    /// Turn towards the protrusion side.
    fn toward(&self, canvas: &mut Canvas, degrees: f64) {
        match self.protrude {
            Protrude::In => canvas.turn_left(degrees),
            Protrude::Out => canvas.turn_right(degrees),
        };
    }

    /// Turn away from the protrusion side.
    fn away(&self, canvas: &mut Canvas, degrees: f64) {
        match self.protrude {
            Protrude::In => canvas.turn_right(degrees),
            Protrude::Out => canvas.turn_left(degrees),
        };
    }

    /// Arc bending away from the protrusion side.
    fn curve_away(&self, canvas: &mut Canvas, degrees: f64, radius: f64) {
        match self.protrude {
            Protrude::In => canvas.curve_right(degrees, radius, radius),
            Protrude::Out => canvas.curve_left(degrees, radius, radius),
        };
    }
}

type ConnectorFn = fn(&mut Canvas, &ConnectorParams);

/// Outline routine for `connector`.
fn outline(connector: Connector) -> ConnectorFn {
    match connector {
        Connector::Rectangle => rectangle,
        Connector::Triangle => triangle,
        Connector::Semicircle => semicircle,
        Connector::Stairs => stairs,
    }
}

/// Trace `connector` on the canvas.
pub fn draw_connector(canvas: &mut Canvas, connector: Connector, params: &ConnectorParams) {
    outline(connector)(canvas, params);
}

fn rectangle(canvas: &mut Canvas, params: &ConnectorParams) {
    let u = params.unit;
    let depth = CONNECTOR_DEPTH * u;
    canvas.draw(params.pad * u);
    params.toward(canvas, 90.0);
    canvas.draw(depth);
    params.away(canvas, 90.0);
    canvas.draw(4.0 * u);
    params.away(canvas, 90.0);
    canvas.draw(depth);
    params.toward(canvas, 90.0);
    canvas.draw(params.pad * u);
}

fn triangle(canvas: &mut Canvas, params: &ConnectorParams) {
    let u = params.unit;
    canvas.draw(params.pad * u);
    params.toward(canvas, 45.0);
    canvas.draw(CONNECTOR_DEPTH * u * SQRT_2);
    params.away(canvas, 90.0);
    canvas.draw(CONNECTOR_DEPTH * u * SQRT_2);
    params.toward(canvas, 45.0);
    canvas.draw(params.pad * u);
}

fn stairs(canvas: &mut Canvas, params: &ConnectorParams) {
    let u = params.unit;
    canvas.draw(params.pad * u);
    params.toward(canvas, 90.0);
    canvas.draw(u);
    params.away(canvas, 90.0);
    canvas.draw(u);
    params.toward(canvas, 90.0);
    canvas.draw(u);
    params.away(canvas, 90.0);
    canvas.draw(2.0 * u);
    params.away(canvas, 90.0);
    canvas.draw(u);
    params.toward(canvas, 90.0);
    canvas.draw(u);
    params.away(canvas, 90.0);
    canvas.draw(u);
    params.toward(canvas, 90.0);
    canvas.draw(params.pad * u);
}

fn semicircle(canvas: &mut Canvas, params: &ConnectorParams) {
    let u = params.unit;
    canvas.draw(params.pad * u);
    params.toward(canvas, 90.0);
    params.curve_away(canvas, 180.0, CONNECTOR_DEPTH * u);
    params.toward(canvas, 90.0);
    canvas.draw(params.pad * u);
}
