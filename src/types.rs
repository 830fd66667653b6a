//! Small strongly-typed primitives shared by the graph and the renderers.
//!
//! - `Angle`: headings and turns in degrees
//! - `BBox`: running bounding box over `DVec2` points
//! - `SvgUnit`: physical unit of the document's width/height
//! - rounding helpers that fix every emitted number to two decimals

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl NumericError {
    /// Check that `value` is finite and strictly positive.
    pub fn check_positive(value: f64) -> Result<f64, NumericError> {
        if value.is_nan() {
            Err(NumericError::NaN)
        } else if value.is_infinite() {
            Err(NumericError::Infinite)
        } else if value == 0.0 {
            Err(NumericError::Zero)
        } else if value < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(value)
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Angle in degrees.
///
/// Headings follow SVG screen coordinates: 0° points along +x and, because y
/// grows downward, positive angles turn clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const QUARTER: Angle = Angle(90.0);
    pub const HALF: Angle = Angle(180.0);

    #[inline]
    pub const fn degrees(val: f64) -> Angle {
        Angle(val)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Unit vector pointing along this heading.
    #[inline]
    pub fn direction(self) -> DVec2 {
        let rad = self.to_radians();
        DVec2::new(rad.cos(), rad.sin())
    }

    /// The same heading folded into `[0, 360)`.
    #[inline]
    pub fn normalized(self) -> Angle {
        Angle(self.0.rem_euclid(360.0))
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle { Angle(-self.0) }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// A box spanning exactly `min`..`max`.
    pub fn from_corners(min: DVec2, max: DVec2) -> Self {
        BBox { min, max }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include a square of half-size `radius` around `center`.
    /// Used to account for the pen's stroke around every touched point.
    pub fn expand_around(&mut self, center: DVec2, radius: f64) {
        self.expand_point(center - DVec2::splat(radius));
        self.expand_point(center + DVec2::splat(radius));
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The box itself, or the degenerate 0×0 box at the origin when empty.
    pub fn or_origin(self) -> BBox {
        if self.is_empty() {
            BBox::from_corners(DVec2::ZERO, DVec2::ZERO)
        } else {
            self
        }
    }
}

/// Physical unit for the SVG `width`/`height` attributes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SvgUnit {
    #[default]
    Px,
    Mm,
    Cm,
    In,
}

impl SvgUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            SvgUnit::Px => "px",
            SvgUnit::Mm => "mm",
            SvgUnit::Cm => "cm",
            SvgUnit::In => "in",
        }
    }
}

impl fmt::Display for SvgUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SvgUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "px" => Ok(SvgUnit::Px),
            "mm" => Ok(SvgUnit::Mm),
            "cm" => Ok(SvgUnit::Cm),
            "in" => Ok(SvgUnit::In),
            other => Err(format!("unknown SVG unit: {other}")),
        }
    }
}

// Float noise below this never moves a value into the next hundredth.
const ROUNDING_SLACK: f64 = 1e-9;

/// Round to two decimals.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round down to two decimals.
#[inline]
pub fn floor2(value: f64) -> f64 {
    (value * 100.0 + ROUNDING_SLACK).floor() / 100.0
}

/// Round up to two decimals.
#[inline]
pub fn ceil2(value: f64) -> f64 {
    (value * 100.0 - ROUNDING_SLACK).ceil() / 100.0
}

/// Format an already-rounded number without trailing zeros or negative zero.
#[inline]
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(-0.001), 0.0);
        assert_eq!(floor2(-0.5), -0.5);
        assert_eq!(floor2(1.239), 1.23);
        assert_eq!(ceil2(1.231), 1.24);
        assert_eq!(ceil2(11.000_000_000_000_002), 11.0);
    }

    #[test]
    fn test_fmt_num_drops_negative_zero() {
        assert_eq!(fmt_num(round2(-0.001)), "0");
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(-3.25), "-3.25");
    }

    #[test]
    fn test_bbox_expand_around() {
        let mut bbox = BBox::new();
        assert!(bbox.is_empty());
        bbox.expand_around(DVec2::new(0.0, 0.0), 0.5);
        bbox.expand_around(DVec2::new(10.0, 0.0), 0.5);
        assert_eq!(bbox.min, DVec2::new(-0.5, -0.5));
        assert_eq!(bbox.max, DVec2::new(10.5, 0.5));
        assert_eq!(bbox.width(), 11.0);
        assert_eq!(bbox.height(), 1.0);
    }

    #[test]
    fn test_empty_bbox_collapses_to_origin() {
        let bbox = BBox::new().or_origin();
        assert_eq!(bbox.min, DVec2::ZERO);
        assert_eq!(bbox.max, DVec2::ZERO);
    }

    #[test]
    fn test_angle_direction() {
        let east = Angle::degrees(0.0).direction();
        assert!((east - DVec2::new(1.0, 0.0)).length() < 1e-12);
        let down = Angle::degrees(90.0).direction();
        assert!((down - DVec2::new(0.0, 1.0)).length() < 1e-12);
        assert_eq!(Angle::degrees(-90.0).normalized(), Angle::degrees(270.0));
    }

    #[test]
    fn test_svg_unit_round_trip() {
        for unit in [SvgUnit::Px, SvgUnit::Mm, SvgUnit::Cm, SvgUnit::In] {
            assert_eq!(unit.as_str().parse::<SvgUnit>(), Ok(unit));
        }
        assert!("pt".parse::<SvgUnit>().is_err());
    }
}
