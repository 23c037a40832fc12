use crate::convert::{ConvertOptions, convert};
use crate::options::ResolveOptions;
use crate::paper_sizes;
use crate::types::*;

/// Resolve sizing options into a complete [`Document`].
///
/// Accepts anything convertible into [`ResolveOptions`], so a bare
/// `[width, height]` pair works as shorthand for pixel dimensions.
pub fn resolve(options: impl Into<ResolveOptions>) -> Result<Document> {
    let options = options.into();

    let dimensions = options
        .dimensions
        .as_ref()
        .ok_or_else(|| DocumentError::InvalidInput("must specify { dimensions }".to_string()))?;

    let units = options.units_or_default();
    let mut size = match dimensions {
        Dimensions::Preset(key) => preset_size(key, units)?,
        Dimensions::Size(size) => *size,
    };
    validate_size(size)?;

    if let Some(orientation) = options.orientation {
        let initial = Orientation::of(size[0], size[1]);
        if orientation != initial {
            log::debug!("Swapping dimensions for {} orientation", orientation);
            size.reverse();
        }
    }

    let pixels_per_inch = options.pixels_per_inch_or_default();
    let [width, height] = size;
    let (canvas_width, canvas_height) = match units {
        Units::Px => (width, height),
        _ => {
            let opts = ConvertOptions::pixels(pixels_per_inch);
            (
                convert(width, units, Units::Px, &opts),
                convert(height, units, Units::Px, &opts),
            )
        }
    };

    let pixel_ratio = options.pixel_ratio_or_default();
    let document = Document {
        width,
        height,
        units,
        canvas_width: canvas_width * pixel_ratio,
        canvas_height: canvas_height * pixel_ratio,
        pixels_per_inch,
        pixel_ratio,
    };
    log::debug!("Resolved document: {:?}", document);

    Ok(document)
}

/// Parse untyped JSON options and resolve them
#[cfg(feature = "serde")]
pub fn resolve_json(value: &serde_json::Value) -> Result<Document> {
    resolve(ResolveOptions::from_json(value)?)
}

fn preset_size(key: &str, units: Units) -> Result<[f64; 2]> {
    let entry = paper_sizes::lookup(key).ok_or_else(|| {
        DocumentError::InvalidInput(format!("no paper size by the key \"{}\"", key))
    })?;
    log::debug!(
        "Preset \"{}\" is {}x{} {}",
        key,
        entry.dimensions[0],
        entry.dimensions[1],
        entry.units
    );

    let opts = ConvertOptions::default();
    Ok(entry
        .dimensions
        .map(|d| convert(d, entry.units, units, &opts)))
}

fn validate_size(size: [f64; 2]) -> Result<()> {
    if size.iter().all(|d| d.is_finite() && *d > 0.0) {
        Ok(())
    } else {
        Err(DocumentError::InvalidInput(format!(
            "dimensions must be positive numbers, got [{}, {}]",
            size[0], size[1]
        )))
    }
}
