//! Token values and their kinds.

use crate::color::ColorValue;
use crate::font::FontStack;

/// The kind of a design token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A color value.
    Color,
    /// An ordered font-family stack.
    FontFamily,
}

impl TokenKind {
    /// Returns a human-readable name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::FontFamily => "font family",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single design token: a color or a font stack.
///
/// Returned by role lookup, where the caller usually matches on the variant
/// or uses the typed accessors on the registry instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// A color token, e.g. the palette entry for `"primary"`.
    Color(ColorValue),
    /// A font-stack token, e.g. the family list for `"sans"`.
    FontFamily(FontStack),
}

impl TokenValue {
    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Color(_) => TokenKind::Color,
            TokenValue::FontFamily(_) => TokenKind::FontFamily,
        }
    }

    /// Returns the color value, if this token is a color.
    pub fn as_color(&self) -> Option<&ColorValue> {
        match self {
            TokenValue::Color(color) => Some(color),
            TokenValue::FontFamily(_) => None,
        }
    }

    /// Returns the font stack, if this token is a font family.
    pub fn as_font_family(&self) -> Option<&FontStack> {
        match self {
            TokenValue::Color(_) => None,
            TokenValue::FontFamily(stack) => Some(stack),
        }
    }
}

impl From<ColorValue> for TokenValue {
    fn from(color: ColorValue) -> Self {
        TokenValue::Color(color)
    }
}

impl From<FontStack> for TokenValue {
    fn from(stack: FontStack) -> Self {
        TokenValue::FontFamily(stack)
    }
}
