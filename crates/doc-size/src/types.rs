use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DocumentError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum Orientation {
    /// Portrait: height >= width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

impl Orientation {
    /// Orientation implied by a width/height pair. Square sizes count as portrait.
    pub fn of(width: f64, height: f64) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl FromStr for Orientation {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(DocumentError::InvalidInput(format!(
                "expected orientation to be \"landscape\" or \"portrait\", got \"{}\"",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = DocumentError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurement system a length unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// Length units understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum Units {
    /// Pixels, scaled to physical size through pixels-per-inch
    #[default]
    Px,
    In,
    Ft,
    /// Points (1/72 inch)
    Pt,
    /// Picas (1/6 inch)
    Pc,
    M,
    Cm,
    Mm,
}

impl Units {
    pub const ALL: [Units; 8] = [
        Units::Px,
        Units::In,
        Units::Ft,
        Units::Pt,
        Units::Pc,
        Units::M,
        Units::Cm,
        Units::Mm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Units::Px => "px",
            Units::In => "in",
            Units::Ft => "ft",
            Units::Pt => "pt",
            Units::Pc => "pc",
            Units::M => "m",
            Units::Cm => "cm",
            Units::Mm => "mm",
        }
    }

    /// Measurement system of a physical unit. Pixels have no system of their
    /// own and are treated as inches once pixels-per-inch is applied.
    pub fn system(self) -> UnitSystem {
        match self {
            Units::M | Units::Cm | Units::Mm => UnitSystem::Metric,
            Units::Px | Units::In | Units::Ft | Units::Pt | Units::Pc => UnitSystem::Imperial,
        }
    }
}

impl FromStr for Units {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Units::ALL
            .into_iter()
            .find(|u| u.as_str() == lower)
            .ok_or_else(|| {
                DocumentError::InvalidInput(format!(
                    "unsupported units \"{}\", expected one of px, in, ft, pt, pc, m, cm, mm",
                    s
                ))
            })
    }
}

impl TryFrom<String> for Units {
    type Error = DocumentError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested document size: a named paper preset or an explicit pair
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged, try_from = "serde_json::Value"))]
pub enum Dimensions {
    /// Paper size preset key such as "a4" or "Letter"
    Preset(String),
    /// Explicit [width, height] in the target units
    Size([f64; 2]),
}

impl From<[f64; 2]> for Dimensions {
    fn from(size: [f64; 2]) -> Self {
        Dimensions::Size(size)
    }
}

impl From<&str> for Dimensions {
    fn from(key: &str) -> Self {
        Dimensions::Preset(key.to_string())
    }
}

impl From<String> for Dimensions {
    fn from(key: String) -> Self {
        Dimensions::Preset(key)
    }
}

/// Resolved document size
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Document {
    /// Width in `units`
    pub width: f64,
    /// Height in `units`
    pub height: f64,
    /// Units of the user coordinate space
    pub units: Units,
    /// Pixel width of the canvas, with `pixel_ratio` applied
    pub canvas_width: f64,
    /// Pixel height of the canvas, with `pixel_ratio` applied
    pub canvas_height: f64,
    pub pixels_per_inch: f64,
    pub pixel_ratio: f64,
}

impl Document {
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width, self.height)
    }
}
