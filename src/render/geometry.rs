//! Geometry functions: elliptical arcs traced by the turtle
//!
//! An arc starts at the turtle's position, tangent to its heading. The
//! ellipse is rotated by the heading, so in ellipse coordinates the turtle
//! always starts at the top (`t = -π/2`, turning right) or the bottom
//! (`t = π/2`, turning left) of the ellipse. A point on the ellipse is
//! `center + R(heading) · (rx·cos t, ry·sin t)`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DMat2, DVec2, dvec2};

use crate::types::Angle;

const EPSILON: f64 = 1e-9;

/// Which way an arc bends relative to the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// An elliptical arc in turtle terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: DVec2,
    pub center: DVec2,
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse axes, equal to the heading at the start.
    pub rotation: Angle,
    /// Requested sweep, as passed to the turtle.
    pub sweep: Angle,
    /// Ellipse parameter at the start point.
    start_param: f64,
    /// Signed parameter change from start to end, in radians.
    delta: f64,
}

impl Arc {
    /// Arc starting at `start` with the turtle facing `heading`.
    pub fn new(start: DVec2, heading: Angle, sweep: Angle, rx: f64, ry: f64, turn: Turn) -> Self {
        let (normal, start_param, delta) = match turn {
            Turn::Right => (Angle::QUARTER, -FRAC_PI_2, sweep.to_radians()),
            Turn::Left => (-Angle::QUARTER, FRAC_PI_2, -sweep.to_radians()),
        };
        Arc {
            start,
            center: start + (heading + normal).direction() * ry,
            rx,
            ry,
            rotation: heading,
            sweep,
            start_param,
            delta,
        }
    }

    pub fn point_at(&self, t: f64) -> DVec2 {
        let local = dvec2(self.rx * t.cos(), self.ry * t.sin());
        self.center + DMat2::from_angle(self.rotation.to_radians()) * local
    }

    pub fn end(&self) -> DVec2 {
        self.point_at(self.start_param + self.delta)
    }

    /// Point diametrically opposite the start, used to split full ellipses.
    pub fn opposite(&self) -> DVec2 {
        self.center + (self.center - self.start)
    }

    /// The sweep covers the whole ellipse.
    pub fn is_full(&self) -> bool {
        self.sweep.raw().abs() >= 360.0
    }

    /// SVG `large-arc-flag`.
    pub fn large_arc(&self) -> bool {
        self.sweep.raw().abs() >= 180.0
    }

    /// SVG `sweep-flag`: the parameter grows from start to end.
    pub fn sweep_positive(&self) -> bool {
        self.delta >= 0.0
    }

    /// Points where the ellipse reaches its horizontal and vertical extremes
    /// inside the swept range.
    pub fn extrema(&self) -> Vec<DVec2> {
        let phi = self.rotation.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let tx = f64::atan2(-self.ry * sin_phi, self.rx * cos_phi);
        let ty = f64::atan2(self.ry * cos_phi, self.rx * sin_phi);

        [tx, tx + PI, ty, ty + PI]
            .into_iter()
            .filter(|&t| self.is_full() || self.covers(t))
            .map(|t| self.point_at(t))
            .collect()
    }

    fn covers(&self, t: f64) -> bool {
        let lo = self.start_param.min(self.start_param + self.delta);
        let hi = self.start_param.max(self.start_param + self.delta);
        let folded = lo + (t - lo).rem_euclid(TAU);
        folded <= hi + EPSILON
    }
}

/// Apothem of a regular polygon with `sides` sides of length `side`.
pub fn apothem(side: f64, sides: usize) -> f64 {
    side / (2.0 * (PI / sides as f64).tan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_right_semicircle_ends_across_the_diameter() {
        let arc = Arc::new(DVec2::ZERO, Angle::ZERO, Angle::HALF, 20.0, 20.0, Turn::Right);
        assert!(close(arc.center, dvec2(0.0, 20.0)));
        assert!(close(arc.end(), dvec2(0.0, 40.0)));
        assert!(arc.sweep_positive());
        assert!(arc.large_arc());
    }

    #[test]
    fn test_left_quarter_arc() {
        let arc = Arc::new(DVec2::ZERO, Angle::ZERO, Angle::QUARTER, 10.0, 10.0, Turn::Left);
        assert!(close(arc.center, dvec2(0.0, -10.0)));
        assert!(close(arc.end(), dvec2(10.0, -10.0)));
        assert!(!arc.sweep_positive());
        assert!(!arc.large_arc());
    }

    #[test]
    fn test_semicircle_extrema() {
        let arc = Arc::new(DVec2::ZERO, Angle::ZERO, Angle::HALF, 20.0, 20.0, Turn::Right);
        let extrema = arc.extrema();
        assert!(extrema.iter().any(|&p| close(p, dvec2(20.0, 20.0))));
        assert!(!extrema.iter().any(|&p| close(p, dvec2(-20.0, 20.0))));
    }

    #[test]
    fn test_full_ellipse_uses_every_extremum() {
        let arc = Arc::new(DVec2::ZERO, Angle::ZERO, Angle::degrees(360.0), 10.0, 5.0, Turn::Left);
        assert!(arc.is_full());
        assert_eq!(arc.extrema().len(), 4);
        assert!(close(arc.opposite(), dvec2(0.0, -10.0)));
    }

    #[test]
    fn test_apothem_of_hexagon() {
        let a = apothem(2.0, 6);
        assert!((a - 3.0_f64.sqrt()).abs() < 1e-12);
    }
}
