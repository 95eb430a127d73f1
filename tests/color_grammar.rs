//! Property tests for the color-value grammar.

use proptest::prelude::*;
use swatchbook::{ColorValue, ThemeConfig};

proptest! {
    #[test]
    fn test_hex_sextets_always_validate(raw in "#[0-9a-fA-F]{6}") {
        prop_assert!(ColorValue::new(raw.as_str()).is_valid());
    }

    #[test]
    fn test_hex_triplets_always_validate(raw in "#[0-9a-fA-F]{3}") {
        prop_assert!(ColorValue::new(raw.as_str()).is_valid());
    }

    #[test]
    fn test_hex_values_roundtrip_unchanged(raw in "#[0-9a-fA-F]{6}") {
        let value = ColorValue::new(raw.as_str());
        let json = serde_json::to_string(&value).unwrap();
        let back: ColorValue = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.as_str(), raw.as_str());
    }

    #[test]
    fn test_documents_with_hex_palettes_validate(raw in "#[0-9a-fA-F]{6}") {
        let config = ThemeConfig::new().add("brand", ColorValue::new(raw.as_str()));
        prop_assert!(config.validate().is_ok());
    }
}

#[test]
fn test_known_css_names_validate() {
    for name in ["black", "white", "red", "cornflowerblue", "rebeccapurple"] {
        assert!(ColorValue::new(name).is_valid(), "'{}' should be valid", name);
    }
}

#[test]
fn test_near_miss_values_are_rejected() {
    for raw in ["1a1a1a", "#12345", "#qqqqqq", "reddish", "rgb(0,0,0)", ""] {
        assert!(!ColorValue::new(raw).is_valid(), "'{}' should be invalid", raw);
    }
}
