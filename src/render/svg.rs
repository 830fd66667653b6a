//! SVG generation
//!
//! The canvas accumulates finished elements as text; this module wraps them in
//! the root `<svg>` element sized to the drawn extent.

use std::fmt::Write;

use crate::errors::RenderError;
use crate::types::{BBox, SvgUnit, ceil2, floor2, fmt_num, round2};

/// Serialization settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgOptions {
    /// Unit of the `width`/`height` attributes
    pub unit: SvgUnit,
    /// Document extent; the canvas limits when `None`
    pub bounds: Option<BBox>,
    /// CSS embedded in a `<style>` element right after the root element
    pub stylesheet: Option<String>,
}

impl SvgOptions {
    pub fn new(unit: SvgUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, bounds: BBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = Some(css.into());
        self
    }
}

/// Escape text and attribute values for XML.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a coordinate the way every element of the document does.
pub(crate) fn num(value: f64) -> String {
    fmt_num(round2(value))
}

/// Wrap finished elements in the root element.
pub(crate) fn generate_svg(
    elements: &str,
    limits: BBox,
    options: &SvgOptions,
) -> Result<String, RenderError> {
    let bounds = options.bounds.unwrap_or(limits);

    let width = bounds.width();
    if width < 0.0 {
        return Err(RenderError::InvalidRange {
            axis: 'x',
            min: bounds.min.x,
            max: bounds.max.x,
        });
    }
    let height = bounds.height();
    if height < 0.0 {
        return Err(RenderError::InvalidRange {
            axis: 'y',
            min: bounds.min.y,
            max: bounds.max.y,
        });
    }

    let x0 = floor2(bounds.min.x);
    let y0 = floor2(bounds.min.y);
    let view_width = ceil2(bounds.max.x - x0);
    let view_height = ceil2(bounds.max.y - y0);

    crate::log::debug!(
        min_x = bounds.min.x,
        min_y = bounds.min.y,
        max_x = bounds.max.x,
        max_y = bounds.max.y,
        "serializing canvas"
    );

    let unit = options.unit;
    let mut svg = String::with_capacity(elements.len() + 256);
    // Writing to a String cannot fail.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}{unit}" height="{}{unit}" viewBox="{} {} {} {}" vector-effect="non-scaling-stroke">"#,
        num(width),
        num(height),
        fmt_num(x0),
        fmt_num(y0),
        fmt_num(view_width),
        fmt_num(view_height),
    );
    if let Some(css) = &options.stylesheet {
        svg.push_str("<style>");
        svg.push_str(css);
        svg.push_str("</style>");
    }
    svg.push_str(elements);
    svg.push_str("</svg>");
    Ok(svg)
}
