//! Color token values.
//!
//! Color tokens are authored as strings and kept in their authored form:
//! a `#`-prefixed hex color (3, 4, 6, or 8 digits) or a CSS color name.
//! Syntax checking is delegated to [`cssparser`]; the shape restriction to
//! hex-or-named is applied first, so function notations like `rgb(...)`
//! are rejected even though they are valid CSS.

use cssparser::{Parser, ParserInput};
use serde::{Deserialize, Serialize};

/// Syntactic category of a color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    /// `#`-prefixed hexadecimal notation, e.g. `#2563eb`.
    Hex,
    /// A CSS color keyword, e.g. `rebeccapurple`.
    Named,
}

/// A color token value in its authored form.
///
/// The value is stored verbatim so that serializing a document reproduces
/// exactly what was authored. Validity is checked by [`ColorValue::is_valid`],
/// which document validation calls for every registered color role.
///
/// # Example
///
/// ```rust
/// use swatchbook::{ColorKind, ColorValue};
///
/// let accent = ColorValue::new("#2563eb");
/// assert!(accent.is_valid());
/// assert_eq!(accent.kind(), Some(ColorKind::Hex));
///
/// let named = ColorValue::new("rebeccapurple");
/// assert!(named.is_valid());
/// assert_eq!(named.kind(), Some(ColorKind::Named));
///
/// assert!(!ColorValue::new("#12345").is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    /// Wraps an authored color string without validating it.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the authored string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies the value by shape alone.
    ///
    /// Returns `None` when the value is neither hex nor a bare name
    /// (e.g. `rgb(0, 0, 0)` or an empty string). A `Some` result says
    /// nothing about validity; `#zzz` still classifies as hex.
    pub fn kind(&self) -> Option<ColorKind> {
        if self.0.starts_with('#') {
            Some(ColorKind::Hex)
        } else if !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(ColorKind::Named)
        } else {
            None
        }
    }

    /// Returns `true` if the value is a syntactically valid hex or named color.
    pub fn is_valid(&self) -> bool {
        self.kind().is_some() && parses_as_css_color(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ColorValue {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Runs the string through the CSS `<color>` grammar.
fn parses_as_css_color(raw: &str) -> bool {
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    cssparser::Color::parse(&mut parser).is_ok() && parser.expect_exhausted().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_sextet_is_valid() {
        assert!(ColorValue::new("#1a1a1a").is_valid());
        assert!(ColorValue::new("#F5F5F5").is_valid());
    }

    #[test]
    fn test_hex_triplet_is_valid() {
        assert!(ColorValue::new("#fff").is_valid());
    }

    #[test]
    fn test_hex_with_alpha_is_valid() {
        assert!(ColorValue::new("#ffff").is_valid());
        assert!(ColorValue::new("#2563eb80").is_valid());
    }

    #[test]
    fn test_named_color_is_valid() {
        assert!(ColorValue::new("red").is_valid());
        assert!(ColorValue::new("rebeccapurple").is_valid());
        // Keywords are matched case-insensitively.
        assert!(ColorValue::new("Blue").is_valid());
    }

    #[test]
    fn test_hex_wrong_length_is_invalid() {
        assert!(!ColorValue::new("#12345").is_valid());
        assert!(!ColorValue::new("#1234567").is_valid());
    }

    #[test]
    fn test_hex_non_digits_are_invalid() {
        assert!(!ColorValue::new("#zzzzzz").is_valid());
    }

    #[test]
    fn test_unknown_name_is_invalid() {
        assert!(!ColorValue::new("notacolor").is_valid());
    }

    #[test]
    fn test_function_notation_is_rejected_by_shape() {
        let value = ColorValue::new("rgb(0, 0, 0)");
        assert_eq!(value.kind(), None);
        assert!(!value.is_valid());
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert_eq!(ColorValue::new("").kind(), None);
        assert!(!ColorValue::new("").is_valid());
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(ColorValue::new("#2563eb").kind(), Some(ColorKind::Hex));
        assert_eq!(ColorValue::new("white").kind(), Some(ColorKind::Named));
    }

    #[test]
    fn test_serde_is_transparent() {
        let value = ColorValue::new("#2563eb");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"#2563eb\"");

        let back: ColorValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
