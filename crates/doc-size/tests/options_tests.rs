use doc_size::*;

#[test]
fn test_defaults() {
    let options = ResolveOptions::default();
    assert_eq!(options.units_or_default(), Units::Px);
    assert_eq!(options.pixels_per_inch_or_default(), 72.0);
    assert_eq!(options.pixel_ratio_or_default(), 1.0);
}

#[test]
fn test_pixels_per_inch_falsy_fallback() {
    let options = ResolveOptions::new("a4").with_pixels_per_inch(0.0);
    assert_eq!(options.pixels_per_inch_or_default(), 72.0);

    let options = ResolveOptions::new("a4").with_pixels_per_inch(f64::NAN);
    assert_eq!(options.pixels_per_inch_or_default(), 72.0);

    let options = ResolveOptions::new("a4").with_pixels_per_inch(150.0);
    assert_eq!(options.pixels_per_inch_or_default(), 150.0);
}

#[test]
fn test_pixel_ratio_zero_kept() {
    let options = ResolveOptions::new("a4").with_pixel_ratio(0.0);
    assert_eq!(options.pixel_ratio_or_default(), 0.0);
}

#[test]
fn test_or_prefers_own_fields() {
    let flags = ResolveOptions {
        units: Some(Units::Mm),
        pixel_ratio: Some(2.0),
        ..Default::default()
    };
    let file = ResolveOptions::new("letter")
        .with_units(Units::In)
        .with_pixels_per_inch(300.0);

    let merged = flags.or(file);
    assert_eq!(merged.dimensions, Some(Dimensions::Preset("letter".to_string())));
    assert_eq!(merged.units, Some(Units::Mm));
    assert_eq!(merged.pixels_per_inch, Some(300.0));
    assert_eq!(merged.orientation, None);
    assert_eq!(merged.pixel_ratio, Some(2.0));
}

#[test]
fn test_parse_orientation() {
    assert_eq!("landscape".parse::<Orientation>().unwrap(), Orientation::Landscape);
    assert_eq!("PORTRAIT".parse::<Orientation>().unwrap(), Orientation::Portrait);
    match "sideways".parse::<Orientation>() {
        Err(DocumentError::InvalidInput(msg)) => assert!(msg.contains("sideways")),
        _ => panic!("Expected InvalidInput error"),
    }
}

#[test]
fn test_parse_units() {
    assert_eq!("cm".parse::<Units>().unwrap(), Units::Cm);
    assert_eq!("IN".parse::<Units>().unwrap(), Units::In);
    for units in Units::ALL {
        assert_eq!(units.to_string().parse::<Units>().unwrap(), units);
    }
    assert!(matches!(
        "furlong".parse::<Units>(),
        Err(DocumentError::InvalidInput(_))
    ));
}

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde_json::json;

    fn invalid_input_message(value: serde_json::Value) -> String {
        match ResolveOptions::from_json(&value) {
            Err(DocumentError::InvalidInput(msg)) => msg,
            other => panic!("Expected InvalidInput for {}, got {:?}", value, other),
        }
    }

    #[test]
    fn test_from_json_shorthand() {
        let options = ResolveOptions::from_json(&json!([640, 480])).unwrap();
        assert_eq!(options, ResolveOptions::from([640.0, 480.0]));
    }

    #[test]
    fn test_from_json_object() {
        let options = ResolveOptions::from_json(&json!({
            "dimensions": "Letter",
            "units": "in",
            "pixelsPerInch": 150,
            "orientation": "LANDSCAPE",
            "pixelRatio": 0
        }))
        .unwrap();
        assert_eq!(options.dimensions, Some(Dimensions::Preset("Letter".to_string())));
        assert_eq!(options.units, Some(Units::In));
        assert_eq!(options.pixels_per_inch, Some(150.0));
        assert_eq!(options.orientation, Some(Orientation::Landscape));
        assert_eq!(options.pixel_ratio, Some(0.0));
    }

    #[test]
    fn test_from_json_empty_strings_are_unset() {
        let options = ResolveOptions::from_json(&json!({
            "dimensions": [10, 20],
            "units": "",
            "orientation": "",
            "pixelRatio": null
        }))
        .unwrap();
        assert_eq!(options.units, None);
        assert_eq!(options.orientation, None);
        assert_eq!(options.pixel_ratio, None);
    }

    #[test]
    fn test_from_json_missing_dimensions() {
        assert!(invalid_input_message(json!(null)).contains("dimensions"));
        assert!(invalid_input_message(json!({})).contains("dimensions"));
        assert!(invalid_input_message(json!({ "dimensions": "" })).contains("dimensions"));
        assert!(invalid_input_message(json!({ "dimensions": 0 })).contains("dimensions"));
        assert!(invalid_input_message(json!("a4")).contains("dimensions"));
    }

    #[test]
    fn test_from_json_wrong_shape() {
        assert!(invalid_input_message(json!({ "dimensions": 12 })).contains("array or string"));
        assert!(invalid_input_message(json!({ "dimensions": { "w": 1 } })).contains("array or string"));
        assert!(invalid_input_message(json!({ "dimensions": [1] })).contains("two dimensional"));
        assert!(invalid_input_message(json!([1, 2, 3])).contains("two dimensional"));
        assert!(invalid_input_message(json!({ "dimensions": [1, "2"] })).contains("number"));
        assert!(invalid_input_message(json!({ "dimensions": [1, 2], "units": 3 })).contains("string"));
    }

    #[test]
    fn test_from_json_str() {
        let options = ResolveOptions::from_json_str(r#"{ "dimensions": "a5", "units": "mm" }"#).unwrap();
        assert_eq!(options.dimensions, Some(Dimensions::Preset("a5".to_string())));
        assert_eq!(options.units, Some(Units::Mm));

        match ResolveOptions::from_json_str("{ not json") {
            Err(DocumentError::Config(msg)) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case() {
        let options = ResolveOptions::new("a4")
            .with_units(Units::Cm)
            .with_pixels_per_inch(300.0)
            .with_orientation(Orientation::Landscape);
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["pixelsPerInch"], json!(300.0));
        assert_eq!(value["orientation"], json!("landscape"));
        assert_eq!(value["units"], json!("cm"));

        let parsed: ResolveOptions = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_serde_and_from_json_agree() {
        for input in [
            json!({ "dimensions": "A4", "units": "CM", "orientation": "Landscape" }),
            json!({ "dimensions": [640, 480], "pixelsPerInch": 0, "pixelRatio": 0 }),
            json!({ "dimensions": [1, 2], "units": "", "orientation": null }),
            json!([1920, 1080]),
            json!({ "dimensions": "" }),
            json!({ "dimensions": [1] }),
            json!({ "dimensions": [1, "2"] }),
            json!({ "dimensions": 12 }),
            json!({ "dimensions": [1, 2], "units": "furlong" }),
            json!({ "dimensions": [1, 2], "orientation": "sideways" }),
            json!(null),
        ] {
            let adapted = ResolveOptions::from_json(&input);
            let derived = serde_json::from_value::<ResolveOptions>(input.clone());
            match (adapted, derived) {
                (Ok(adapted), Ok(derived)) => assert_eq!(adapted, derived, "for {}", input),
                (Err(adapted), Err(derived)) => {
                    assert!(matches!(adapted, DocumentError::InvalidInput(_)));
                    assert!(
                        derived.to_string().contains(&adapted.to_string()),
                        "for {}: {} vs {}",
                        input,
                        adapted,
                        derived
                    );
                }
                (adapted, derived) => {
                    panic!("Paths disagree for {}: {:?} vs {:?}", input, adapted, derived)
                }
            }
        }
    }

    #[test]
    fn test_serde_units_and_orientation_ignore_case() {
        assert_eq!(serde_json::from_value::<Units>(json!("MM")).unwrap(), Units::Mm);
        assert_eq!(
            serde_json::from_value::<Orientation>(json!("Portrait")).unwrap(),
            Orientation::Portrait
        );
        assert!(serde_json::from_value::<Units>(json!("furlong")).is_err());
    }
}
