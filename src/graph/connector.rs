//! Connector kinds and the side of a component they sit on.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The notch shape joining two adjacent components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Connector {
    Rectangle,
    Triangle,
    Semicircle,
    Stairs,
}

impl Connector {
    pub const ALL: [Connector; 4] = [
        Connector::Rectangle,
        Connector::Triangle,
        Connector::Semicircle,
        Connector::Stairs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Connector::Rectangle => "rectangle",
            Connector::Triangle => "triangle",
            Connector::Semicircle => "semicircle",
            Connector::Stairs => "stairs",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a connector name is not one of the known kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown connector: {0}")]
pub struct UnknownConnector(pub String);

impl FromStr for Connector {
    type Err = UnknownConnector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Connector::ALL
            .into_iter()
            .find(|connector| connector.as_str() == s)
            .ok_or_else(|| UnknownConnector(s.to_string()))
    }
}

/// Which edge of a component a connector list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Inbound,
    Outbound,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Inbound => f.write_str("inbound"),
            Side::Outbound => f.write_str("outbound"),
        }
    }
}
