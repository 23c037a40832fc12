use crate::types::*;

/// Pixels per inch used when none (or zero) is requested
pub const DEFAULT_PIXELS_PER_INCH: f64 = 72.0;

/// Pixel ratio used when none is requested
pub const DEFAULT_PIXEL_RATIO: f64 = 1.0;

/// Document sizing request.
///
/// Deserializing goes through [`ResolveOptions::from_json`], so serde and the
/// JSON adapter accept and reject exactly the same inputs.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "serde_json::Value")
)]
pub struct ResolveOptions {
    /// Preset name or explicit [width, height]
    pub dimensions: Option<Dimensions>,
    /// Output units, `px` when unset
    pub units: Option<Units>,
    /// Resolution for physical-to-pixel conversion; unset and `0` both mean 72
    pub pixels_per_inch: Option<f64>,
    /// Forces the final width/height order
    pub orientation: Option<Orientation>,
    /// Canvas scale factor; unset means 1, an explicit `0` is kept
    pub pixel_ratio: Option<f64>,
}

impl From<[f64; 2]> for ResolveOptions {
    fn from(size: [f64; 2]) -> Self {
        Self {
            dimensions: Some(Dimensions::Size(size)),
            ..Default::default()
        }
    }
}

impl ResolveOptions {
    pub fn new(dimensions: impl Into<Dimensions>) -> Self {
        Self {
            dimensions: Some(dimensions.into()),
            ..Default::default()
        }
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }

    pub fn with_pixels_per_inch(mut self, pixels_per_inch: f64) -> Self {
        self.pixels_per_inch = Some(pixels_per_inch);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = Some(pixel_ratio);
        self
    }

    /// Fill every unset field of `self` from `other`
    pub fn or(self, other: ResolveOptions) -> Self {
        Self {
            dimensions: self.dimensions.or(other.dimensions),
            units: self.units.or(other.units),
            pixels_per_inch: self.pixels_per_inch.or(other.pixels_per_inch),
            orientation: self.orientation.or(other.orientation),
            pixel_ratio: self.pixel_ratio.or(other.pixel_ratio),
        }
    }

    pub fn units_or_default(&self) -> Units {
        self.units.unwrap_or_default()
    }

    /// Zero and NaN fall back to the default, unlike `pixel_ratio_or_default`
    pub fn pixels_per_inch_or_default(&self) -> f64 {
        match self.pixels_per_inch {
            Some(ppi) if ppi != 0.0 && !ppi.is_nan() => ppi,
            _ => DEFAULT_PIXELS_PER_INCH,
        }
    }

    pub fn pixel_ratio_or_default(&self) -> f64 {
        self.pixel_ratio.unwrap_or(DEFAULT_PIXEL_RATIO)
    }

    /// Parse options from JSON text
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| DocumentError::Config(format!("Failed to parse options: {}", e)))?;
        Self::from_json(&value)
    }

    /// Build options from an untyped JSON value.
    ///
    /// Accepts a bare `[width, height]` array as shorthand for
    /// `{ "dimensions": [width, height] }`, or an object with the fields
    /// `dimensions`, `units`, `pixelsPerInch`, `orientation` and `pixelRatio`.
    /// Empty strings and nulls are treated as unset.
    #[cfg(feature = "serde")]
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        let fields = match value {
            Value::Array(_) => {
                return Ok(Self {
                    dimensions: Some(json::dimensions(value)?),
                    ..Default::default()
                });
            }
            Value::Object(fields) => fields,
            _ => return Err(json::missing_dimensions()),
        };

        let dimensions = match fields.get("dimensions") {
            None => return Err(json::missing_dimensions()),
            Some(value) if json::is_falsy(value) => return Err(json::missing_dimensions()),
            Some(value) => json::dimensions(value)?,
        };

        Ok(Self {
            dimensions: Some(dimensions),
            units: json::optional_str(fields, "units")?
                .map(str::parse::<Units>)
                .transpose()?,
            pixels_per_inch: json::optional_number(fields, "pixelsPerInch")?,
            orientation: json::optional_str(fields, "orientation")?
                .map(str::parse::<Orientation>)
                .transpose()?,
            pixel_ratio: json::optional_number(fields, "pixelRatio")?,
        })
    }
}

#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for ResolveOptions {
    type Error = DocumentError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Self::from_json(&value)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for Dimensions {
    type Error = DocumentError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        json::dimensions(&value)
    }
}

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde_json::{Map, Value};

    pub(super) fn missing_dimensions() -> DocumentError {
        DocumentError::InvalidInput("must specify { dimensions }".to_string())
    }

    pub(super) fn is_falsy(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().is_none_or(|n| n == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }

    pub(super) fn dimensions(value: &Value) -> Result<Dimensions> {
        match value {
            Value::String(key) => Ok(Dimensions::Preset(key.clone())),
            Value::Array(items) => {
                if items.len() != 2 {
                    return Err(DocumentError::InvalidInput(format!(
                        "expected two dimensional {{ dimensions }}, got {} element(s)",
                        items.len()
                    )));
                }
                let width = number(&items[0], "dimensions[0]")?;
                let height = number(&items[1], "dimensions[1]")?;
                Ok(Dimensions::Size([width, height]))
            }
            _ => Err(DocumentError::InvalidInput(
                "expected array or string for { dimensions }".to_string(),
            )),
        }
    }

    fn number(value: &Value, name: &str) -> Result<f64> {
        value
            .as_f64()
            .ok_or_else(|| DocumentError::InvalidInput(format!("expected {} to be a number", name)))
    }

    pub(super) fn optional_number(fields: &Map<String, Value>, name: &str) -> Result<Option<f64>> {
        match fields.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => number(value, name).map(Some),
        }
    }

    pub(super) fn optional_str<'a>(
        fields: &'a Map<String, Value>,
        name: &str,
    ) -> Result<Option<&'a str>> {
        match fields.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(DocumentError::InvalidInput(format!(
                "expected {} to be a string",
                name
            ))),
        }
    }
}
