//! Turtle canvas
//!
//! A cursor with a position and a heading that traces SVG paths as it moves.
//! Every method returns `&mut Self` so drawing reads as one chain:
//!
//! ```
//! use assembly_svg::render::{Canvas, PathOptions};
//!
//! let mut canvas = Canvas::new();
//! canvas
//!     .begin_path(PathOptions::new().fill("pink"))
//!     .draw(10.0)
//!     .turn_left(90.0)
//!     .draw(10.0)
//!     .close_path();
//! ```
//!
//! Headings are in degrees with 0 pointing along +x. The y axis grows
//! downward, so `turn_right` adds to the heading and `turn_left` subtracts.

use std::fmt::{self, Write};

use glam::DVec2;

use super::defaults;
use super::geometry::{Arc, Turn};
use super::svg::{SvgOptions, escape_xml, generate_svg, num};
use crate::errors::RenderError;
use crate::types::{Angle, BBox, SvgUnit};

/// Sweeps smaller than this draw nothing
const MIN_SWEEP: f64 = 1e-6;

/// Dash pattern of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lineature {
    #[default]
    Solid,
    Dotted,
    Dashed,
}

impl Lineature {
    /// Value of the `stroke-dasharray` attribute
    pub fn dasharray(self) -> &'static str {
        match self {
            Lineature::Solid => "none",
            Lineature::Dotted => "1",
            Lineature::Dashed => "3 1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineJoin {
    Bevel,
    Miter,
    #[default]
    Round,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

/// The pen a path is drawn with. It carries over from one path to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct PenStyle {
    pub width: f64,
    pub color: String,
    pub fill: String,
    pub lineature: Lineature,
    pub join: LineJoin,
    pub cap: LineCap,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            width: defaults::PEN_WIDTH,
            color: defaults::PEN_COLOR.to_string(),
            fill: defaults::PEN_FILL.to_string(),
            lineature: Lineature::default(),
            join: LineJoin::default(),
            cap: LineCap::default(),
        }
    }
}

/// Overrides applied when a path begins. Unset fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathOptions {
    pub position: Option<DVec2>,
    pub heading: Option<Angle>,
    pub width: Option<f64>,
    pub color: Option<String>,
    pub fill: Option<String>,
    pub lineature: Option<Lineature>,
    pub join: Option<LineJoin>,
    pub cap: Option<LineCap>,
}

impl PathOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, position: impl Into<DVec2>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn heading(mut self, degrees: f64) -> Self {
        self.heading = Some(Angle::degrees(degrees));
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn lineature(mut self, lineature: Lineature) -> Self {
        self.lineature = Some(lineature);
        self
    }

    pub fn join(mut self, join: LineJoin) -> Self {
        self.join = Some(join);
        self
    }

    pub fn cap(mut self, cap: LineCap) -> Self {
        self.cap = Some(cap);
        self
    }
}

/// Position and heading of the turtle, saved so it can be restored later.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Alignment {
    pub position: DVec2,
    pub heading: Angle,
}

/// Stateful drawing surface. One canvas per rendered document.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    position: DVec2,
    heading: Angle,
    pen: PenStyle,
    /// Finished elements
    content: String,
    /// Path data of the open path, header included
    path: Option<String>,
    bounds: BBox,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // State
    // ========================================================================

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn pen(&self) -> &PenStyle {
        &self.pen
    }

    pub fn is_path_open(&self) -> bool {
        self.path.is_some()
    }

    pub fn alignment(&self) -> Alignment {
        Alignment {
            position: self.position,
            heading: self.heading,
        }
    }

    /// Extent of everything drawn so far, stroke included.
    /// A canvas nothing was drawn on reports the 0×0 box at the origin.
    pub fn limits(&self) -> BBox {
        self.bounds.or_origin()
    }

    // ========================================================================
    // Heading
    // ========================================================================

    pub fn turn(&mut self, degrees: f64) -> &mut Self {
        self.heading += Angle::degrees(degrees);
        self
    }

    pub fn turn_left(&mut self, degrees: f64) -> &mut Self {
        self.heading -= Angle::degrees(degrees);
        self
    }

    pub fn turn_right(&mut self, degrees: f64) -> &mut Self {
        self.heading += Angle::degrees(degrees);
        self
    }

    pub fn turn_to(&mut self, degrees: f64) -> &mut Self {
        self.heading = Angle::degrees(degrees);
        self
    }

    // ========================================================================
    // Movement
    // ========================================================================

    /// Move along the heading without drawing.
    pub fn move_by(&mut self, distance: f64) -> &mut Self {
        let target = self.position + self.heading.direction() * distance;
        self.move_to(target)
    }

    /// Jump to `point`. An open path records the jump as `M`.
    pub fn move_to(&mut self, point: impl Into<DVec2>) -> &mut Self {
        self.position = point.into();
        if let Some(path) = self.path.as_mut() {
            let _ = write!(path, "M {},{} ", num(self.position.x), num(self.position.y));
        }
        self
    }

    pub fn position_at(&mut self, point: impl Into<DVec2>) -> &mut Self {
        self.move_to(point)
    }

    pub fn align_at(&mut self, alignment: Alignment) -> &mut Self {
        self.heading = alignment.heading;
        self.move_to(alignment.position)
    }

    /// Draw along the heading.
    pub fn draw(&mut self, distance: f64) -> &mut Self {
        let target = self.position + self.heading.direction() * distance;
        self.draw_to(target)
    }

    /// Draw a straight segment to `point`, opening a path if none is open.
    pub fn draw_to(&mut self, point: impl Into<DVec2>) -> &mut Self {
        let point = point.into();
        self.ensure_path();
        self.touch(self.position);
        self.position = point;
        if let Some(path) = self.path.as_mut() {
            let _ = write!(path, "L {},{} ", num(point.x), num(point.y));
        }
        self.touch(point);
        self
    }

    /// Arc bending left by `degrees` on an ellipse with radii `rx`, `ry`.
    pub fn curve_left(&mut self, degrees: f64, rx: f64, ry: f64) -> &mut Self {
        self.curve(Angle::degrees(degrees), rx, ry, Turn::Left)
    }

    /// Arc bending right by `degrees` on an ellipse with radii `rx`, `ry`.
    pub fn curve_right(&mut self, degrees: f64, rx: f64, ry: f64) -> &mut Self {
        self.curve(Angle::degrees(degrees), rx, ry, Turn::Right)
    }

    fn curve(&mut self, sweep: Angle, rx: f64, ry: f64, turn: Turn) -> &mut Self {
        if sweep.raw().abs() < MIN_SWEEP {
            return self;
        }
        self.ensure_path();

        let arc = Arc::new(self.position, self.heading, sweep, rx, ry, turn);
        let end = arc.end();
        let radii = format!("{} {} {}", num(rx), num(ry), num(arc.rotation.raw()));
        let sweep_flag = u8::from(arc.sweep_positive());

        if let Some(path) = self.path.as_mut() {
            if arc.is_full() {
                let opposite = arc.opposite();
                let _ = write!(
                    path,
                    "A {radii} 1 {sweep_flag} {} {} A {radii} 1 {sweep_flag} {} {} M {},{} ",
                    num(opposite.x),
                    num(opposite.y),
                    num(arc.start.x),
                    num(arc.start.y),
                    num(end.x),
                    num(end.y),
                );
            } else {
                let _ = write!(
                    path,
                    "A {radii} {} {sweep_flag} {} {} ",
                    u8::from(arc.large_arc()),
                    num(end.x),
                    num(end.y),
                );
            }
        }

        self.touch(arc.start);
        for extremum in arc.extrema() {
            self.touch(extremum);
        }
        self.touch(end);

        self.heading = match turn {
            Turn::Right => self.heading + sweep,
            Turn::Left => self.heading - sweep,
        };
        self.position = end;
        self
    }

    // ========================================================================
    // Paths and text
    // ========================================================================

    /// Start a new path at the (possibly overridden) position.
    /// Any open path is ended first.
    pub fn begin_path(&mut self, options: PathOptions) -> &mut Self {
        self.end_path();

        if let Some(position) = options.position {
            self.position = position;
        }
        if let Some(heading) = options.heading {
            self.heading = heading;
        }
        if let Some(width) = options.width {
            self.pen.width = width;
        }
        if let Some(color) = options.color {
            self.pen.color = color;
        }
        if let Some(fill) = options.fill {
            self.pen.fill = fill;
        }
        if let Some(lineature) = options.lineature {
            self.pen.lineature = lineature;
        }
        if let Some(join) = options.join {
            self.pen.join = join;
        }
        if let Some(cap) = options.cap {
            self.pen.cap = cap;
        }

        let pen = &self.pen;
        self.path = Some(format!(
            r#"<path fill="{}" stroke="{}" stroke-width="{}" stroke-linejoin="{}" stroke-linecap="{}" stroke-dasharray="{}" d=""#,
            escape_xml(&pen.fill),
            escape_xml(&pen.color),
            num(pen.width),
            pen.join,
            pen.cap,
            pen.lineature.dasharray(),
        ));
        self.move_to(self.position)
    }

    pub fn end_path(&mut self) -> &mut Self {
        if let Some(path) = self.path.take() {
            self.content.push_str(&path);
            self.content.push_str("\"/>");
        }
        self
    }

    /// Close the open path back to its first point and end it.
    pub fn close_path(&mut self) -> &mut Self {
        if let Some(path) = self.path.as_mut() {
            path.push('Z');
        }
        self.end_path()
    }

    /// Write a label centred on the turtle and rotated by its heading.
    pub fn text(&mut self, label: &str) -> &mut Self {
        self.end_path();
        let x = num(self.position.x);
        let y = num(self.position.y);
        let _ = write!(
            self.content,
            r#"<text font-size="{}" transform="rotate({}, {x}, {y})" dominant-baseline="middle" text-anchor="middle" x="{x}" y="{y}">{}</text>"#,
            defaults::FONT_SIZE,
            num(self.heading.raw()),
            escape_xml(label),
        );
        self
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Serialize the drawing sized to its limits.
    pub fn as_svg(&self, unit: SvgUnit) -> Result<String, RenderError> {
        self.to_svg(&SvgOptions::new(unit))
    }

    /// Serialize the drawing. An open path is emitted as if it had been ended;
    /// the canvas itself is left untouched.
    pub fn to_svg(&self, options: &SvgOptions) -> Result<String, RenderError> {
        match &self.path {
            Some(path) => {
                let elements = format!("{}{path}\"/>", self.content);
                generate_svg(&elements, self.limits(), options)
            }
            None => generate_svg(&self.content, self.limits(), options),
        }
    }

    fn ensure_path(&mut self) {
        if self.path.is_none() {
            self.begin_path(PathOptions::default());
        }
    }

    /// Grow the bounds around a point the pen touched.
    fn touch(&mut self, point: DVec2) {
        self.bounds.expand_around(point, self.pen.width / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_draw_moves_and_tracks_bounds() {
        let mut canvas = Canvas::new();
        canvas.draw(10.0);
        assert!(close(canvas.position(), dvec2(10.0, 0.0)));
        let limits = canvas.limits();
        assert_eq!(limits.min, dvec2(-0.5, -0.5));
        assert_eq!(limits.max, dvec2(10.5, 0.5));
    }

    #[test]
    fn test_simple_line_svg() {
        let mut canvas = Canvas::new();
        canvas.draw(10.0);
        insta::assert_snapshot!(canvas.as_svg(SvgUnit::Px).unwrap(), @r##"<svg xmlns="http://www.w3.org/2000/svg" width="11px" height="1px" viewBox="-0.5 -0.5 11 1" vector-effect="non-scaling-stroke"><path fill="none" stroke="#000000" stroke-width="1" stroke-linejoin="round" stroke-linecap="round" stroke-dasharray="none" d="M 0,0 L 10,0 "/></svg>"##);
    }

    #[test]
    fn test_empty_canvas_svg() {
        let canvas = Canvas::new();
        insta::assert_snapshot!(canvas.as_svg(SvgUnit::Mm).unwrap(), @r#"<svg xmlns="http://www.w3.org/2000/svg" width="0mm" height="0mm" viewBox="0 0 0 0" vector-effect="non-scaling-stroke"></svg>"#);
    }

    #[test]
    fn test_as_svg_is_repeatable() {
        let mut canvas = Canvas::new();
        canvas.draw(5.0).turn_left(90.0).draw(5.0);
        let first = canvas.as_svg(SvgUnit::Px).unwrap();
        let second = canvas.as_svg(SvgUnit::Px).unwrap();
        assert_eq!(first, second);
        assert!(canvas.is_path_open());
    }

    #[test]
    fn test_turns_follow_screen_orientation() {
        let mut canvas = Canvas::new();
        canvas.turn_right(90.0).move_by(10.0);
        assert!(close(canvas.position(), dvec2(0.0, 10.0)));
        canvas.turn_left(180.0).move_by(10.0);
        assert!(close(canvas.position(), DVec2::ZERO));
        canvas.turn(45.0).turn_to(30.0);
        assert_eq!(canvas.heading(), Angle::degrees(30.0));
    }

    #[test]
    fn test_move_without_path_emits_nothing() {
        let mut canvas = Canvas::new();
        canvas.move_by(10.0).move_to((3.0, 4.0));
        assert!(!canvas.is_path_open());
        assert!(canvas.limits().min == DVec2::ZERO && canvas.limits().max == DVec2::ZERO);
    }

    #[test]
    fn test_position_at_jumps_within_the_path() {
        let mut canvas = Canvas::new();
        canvas.draw(10.0).position_at((20.0, 5.0)).draw(10.0);
        assert!(close(canvas.position(), dvec2(30.0, 5.0)));

        let svg = canvas.as_svg(SvgUnit::Px).unwrap();
        assert!(svg.contains(r#"d="M 0,0 L 10,0 M 20,5 L 30,5 "/>"#));
        assert_eq!(canvas.limits().min, dvec2(-0.5, -0.5));
        assert_eq!(canvas.limits().max, dvec2(30.5, 5.5));
    }

    #[test]
    fn test_begin_path_applies_options() {
        let mut canvas = Canvas::new();
        canvas
            .begin_path(
                PathOptions::new()
                    .at((2.0, 3.0))
                    .heading(90.0)
                    .width(2.0)
                    .color("red")
                    .fill("pink")
                    .lineature(Lineature::Dashed)
                    .join(LineJoin::Miter)
                    .cap(LineCap::Square),
            )
            .draw(4.0)
            .close_path();

        let svg = canvas.as_svg(SvgUnit::Px).unwrap();
        assert!(svg.contains(r#"<path fill="pink" stroke="red" stroke-width="2" stroke-linejoin="miter" stroke-linecap="square" stroke-dasharray="3 1" d="M 2,3 L 2,7 Z"/>"#));
        assert_eq!(canvas.pen().width, 2.0);
    }

    #[test]
    fn test_pen_carries_over_to_next_path() {
        let mut canvas = Canvas::new();
        canvas.begin_path(PathOptions::new().fill("pink")).draw(1.0);
        canvas.begin_path(PathOptions::new()).draw(1.0).end_path();
        let svg = canvas.as_svg(SvgUnit::Px).unwrap();
        assert_eq!(svg.matches(r#"fill="pink""#).count(), 2);
    }

    #[test]
    fn test_text_ends_path_and_escapes() {
        let mut canvas = Canvas::new();
        canvas.draw(10.0).turn_right(90.0).text("a<b");
        assert!(!canvas.is_path_open());
        let svg = canvas.as_svg(SvgUnit::Px).unwrap();
        assert!(svg.ends_with(r#""/><text font-size="1.2em" transform="rotate(90, 10, 0)" dominant-baseline="middle" text-anchor="middle" x="10" y="0">a&lt;b</text></svg>"#));
    }

    #[test]
    fn test_semicircle_curve_bounds() {
        let mut canvas = Canvas::new();
        canvas.begin_path(PathOptions::new()).curve_right(180.0, 20.0, 20.0);
        assert!(close(canvas.position(), dvec2(0.0, 40.0)));
        assert_eq!(canvas.heading(), Angle::degrees(180.0));

        let limits = canvas.limits();
        assert!(close(limits.min, dvec2(-0.5, -0.5)));
        assert!(close(limits.max, dvec2(20.5, 40.5)));

        let svg = canvas.as_svg(SvgUnit::Px).unwrap();
        assert!(svg.contains(r#"d="M 0,0 A 20 20 0 1 1 0 40 "/>"#));
    }

    #[test]
    fn test_full_circle_returns_to_start() {
        let mut canvas = Canvas::new();
        canvas.begin_path(PathOptions::new()).curve_left(360.0, 5.0, 5.0);
        assert!(close(canvas.position(), DVec2::ZERO));
        assert_eq!(canvas.heading(), Angle::degrees(-360.0));
        let limits = canvas.limits();
        assert!(close(limits.min, dvec2(-5.5, -10.5)));
        assert!(close(limits.max, dvec2(5.5, 0.5)));
    }

    #[test]
    fn test_alignment_round_trip() {
        let mut canvas = Canvas::new();
        canvas.move_to((4.0, 2.0)).turn_to(45.0);
        let saved = canvas.alignment();
        canvas.move_by(100.0).turn_left(10.0);
        canvas.align_at(saved);
        assert_eq!(canvas.alignment(), saved);
    }
}
