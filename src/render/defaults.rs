//! Default sizes and settings (lengths are in connector units unless noted)

/// Side length of one connector unit, in SVG user units
pub const UNIT: f64 = 10.0;
pub const COMPONENT_WIDTH: f64 = 16.0;
pub const COMPONENT_HEIGHT: f64 = 8.0;

/// Outline stroke of components and the hub, in SVG user units
pub const STROKE_WIDTH: f64 = 4.0;
pub const STROKE: &str = "black";
pub const COMPONENT_FILL: &str = "white";

/// Pen used by a fresh canvas
pub const PEN_WIDTH: f64 = 1.0;
pub const PEN_COLOR: &str = "#000000";
pub const PEN_FILL: &str = "none";

pub const FONT_SIZE: &str = "1.2em";

/// Connector slot, in units
pub const CONNECTOR_LENGTH: f64 = 4.0;
pub const CONNECTOR_DEPTH: f64 = 2.0;

/// Straight run on either side of a hub connector, as a share of component width
pub const HUB_EDGE_PADDING: f64 = 0.25;
/// Fewest sides per half of the hub outline
pub const HUB_MIN_SIDES: usize = 3;
