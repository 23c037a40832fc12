//! Length unit conversion
//!
//! Values are first scaled to the anchor unit of their measurement system
//! (metres or inches), moved across systems if needed, then scaled to the
//! target unit. Pixels are expressed as inches through pixels-per-inch.

use crate::types::{UnitSystem, Units};

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Metres per inch, used to cross between metric and imperial anchors
const METERS_PER_INCH: f64 = MM_PER_INCH / 1000.0;

/// Pixels per inch assumed by [`ConvertOptions::default`] (CSS reference pixel)
pub const DEFAULT_CONVERT_PIXELS_PER_INCH: f64 = 96.0;

/// Options for [`convert`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    /// Round to the nearest whole pixel when converting to `px`
    pub round_pixel: bool,
    /// Physical-to-pixel scale for `px` on either side
    pub pixels_per_inch: f64,
    /// Round the result to this many decimals (ignored when `round_pixel` applies)
    pub precision: Option<u32>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            round_pixel: false,
            pixels_per_inch: DEFAULT_CONVERT_PIXELS_PER_INCH,
            precision: None,
        }
    }
}

impl ConvertOptions {
    /// Options for converting to whole pixels at the given resolution
    pub fn pixels(pixels_per_inch: f64) -> Self {
        Self {
            round_pixel: true,
            pixels_per_inch,
            precision: None,
        }
    }
}

/// Size of one unit relative to its system's anchor (metre or inch)
fn ratio(units: Units) -> f64 {
    match units {
        Units::M => 1.0,
        Units::Cm => 1.0 / 100.0,
        Units::Mm => 1.0 / 1000.0,
        Units::In | Units::Px => 1.0,
        Units::Ft => 12.0,
        Units::Pt => 1.0 / 72.0,
        Units::Pc => 1.0 / 6.0,
    }
}

/// Factor that moves an anchor value out of `system` into the other one
fn anchor_ratio(system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => 1.0 / METERS_PER_INCH,
        UnitSystem::Imperial => METERS_PER_INCH,
    }
}

/// Convert `value` from one length unit to another
pub fn convert(value: f64, from: Units, to: Units, options: &ConvertOptions) -> f64 {
    if from == to {
        return value;
    }

    let from_factor = match from {
        Units::Px => 1.0 / options.pixels_per_inch,
        _ => 1.0,
    };
    let (to_factor, to_pixel) = match to {
        Units::Px => (options.pixels_per_inch, true),
        _ => (1.0, false),
    };

    let mut anchor = value * ratio(from) * from_factor;
    if from.system() != to.system() {
        anchor *= anchor_ratio(from.system());
    }

    let result = anchor / ratio(to) * to_factor;
    if to_pixel && options.round_pixel {
        result.round()
    } else if let Some(decimals) = options.precision {
        round_to(result, decimals)
    } else {
        result
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
