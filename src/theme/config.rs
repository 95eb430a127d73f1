//! The design-token document handed to the styling build tool.

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;
use crate::font::FontStack;
use crate::token::{TokenLookupError, TokenSet, TokenValidationError, TokenValue};

/// An immutable, validated design-token configuration.
///
/// The document mirrors the authored shape — tokens sit under
/// `theme.extend`, split into a `fontFamily` mapping and a `colors`
/// mapping — so serializing it reproduces what a config author would write:
///
/// ```json
/// {
///   "theme": {
///     "extend": {
///       "fontFamily": { "sans": ["Inter", "sans-serif"] },
///       "colors": { "primary": "#1a1a1a" }
///     }
///   }
/// }
/// ```
///
/// A document is built once — from the built-in literal ([`ThemeConfig::load`]),
/// the fluent builder, or an authored file (see [`crate::source`]) — and is
/// immutable afterwards: there are no setters, and every loading path
/// validates before handing the value out. Once constructed it can be shared
/// by reference across any number of readers.
///
/// # Example
///
/// ```rust
/// use swatchbook::{ColorValue, FontStack, ThemeConfig};
///
/// let config = ThemeConfig::new()
///     .add("sans", FontStack::new(["Inter", "sans-serif"]))
///     .add("accent", ColorValue::new("#2563eb"));
/// config.validate().unwrap();
///
/// assert_eq!(config.color("accent").unwrap().as_str(), "#2563eb");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ThemeSection {
    #[serde(default)]
    extend: TokenSet,
}

impl ThemeConfig {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from an existing [`TokenSet`].
    pub fn from_tokens(tokens: TokenSet) -> Self {
        Self {
            theme: ThemeSection { extend: tokens },
        }
    }

    /// Constructs the built-in document from its literal definition.
    ///
    /// No I/O is involved. The literal registers the `sans` font stack and
    /// the `primary`/`secondary`/`accent` palette, and is validated before
    /// being returned.
    ///
    /// # Errors
    ///
    /// Returns [`TokenValidationError`] if a token fails its format
    /// contract. For [`reference`](crate::reference), which wraps this in a
    /// shared static, that cannot happen.
    pub fn load() -> Result<Self, TokenValidationError> {
        let config = Self::new()
            .add("sans", FontStack::new(["Inter", "sans-serif"]))
            .add("primary", ColorValue::new("#1a1a1a"))
            .add("secondary", ColorValue::new("#f5f5f5"))
            .add("accent", ColorValue::new("#2563eb"));
        config.validate()?;
        Ok(config)
    }

    /// Registers a token, returning the updated document for chaining.
    pub fn add<V: Into<TokenValue>>(mut self, role: &str, value: V) -> Self {
        self.theme.extend = self.theme.extend.add(role, value);
        self
    }

    /// Returns the underlying token set.
    pub fn tokens(&self) -> &TokenSet {
        &self.theme.extend
    }

    /// Returns `true` if a token is registered under the role.
    pub fn has(&self, role: &str) -> bool {
        self.theme.extend.has(role)
    }

    /// Looks up a token by role.
    ///
    /// # Errors
    ///
    /// Returns [`TokenLookupError::UnknownRole`] for undefined roles; the
    /// consumer treats that as "fall through to the framework default".
    pub fn get(&self, role: &str) -> Result<TokenValue, TokenLookupError> {
        self.theme.extend.get(role)
    }

    /// Looks up a color role.
    pub fn color(&self, role: &str) -> Result<&ColorValue, TokenLookupError> {
        self.theme.extend.color(role)
    }

    /// Looks up a font role.
    pub fn font_family(&self, role: &str) -> Result<&FontStack, TokenLookupError> {
        self.theme.extend.font_family(role)
    }

    /// Validates every registered token.
    ///
    /// Called automatically by every loading path; can be called explicitly
    /// after building a document by hand.
    pub fn validate(&self) -> Result<(), TokenValidationError> {
        self.theme.extend.validate()
    }

    /// Merges `overrides` into this document, returning the combined one.
    ///
    /// Override entries win on conflicts; see [`TokenSet::merge`].
    pub fn merge(mut self, overrides: ThemeConfig) -> ThemeConfig {
        self.theme.extend = self.theme.extend.merge(overrides.theme.extend);
        self
    }
}
