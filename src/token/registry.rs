//! Role registry for design tokens.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::ColorValue;
use crate::font::FontStack;

use super::error::{TokenLookupError, TokenValidationError};
use super::value::{TokenKind, TokenValue};

/// The set of design tokens registered under `theme.extend`.
///
/// Roles live in two mappings that mirror the authored document: `colors`
/// and `fontFamily`. Within each mapping keys are unique by construction
/// (insertion-ordered maps), and a role appearing in both mappings is a
/// validation error, since [`TokenSet::get`] resolves roles across both.
///
/// Registration uses the same fluent, consuming-`self` style as the rest of
/// the crate:
///
/// ```rust
/// use swatchbook::{ColorValue, FontStack, TokenSet};
///
/// let tokens = TokenSet::new()
///     .add("sans", FontStack::new(["Inter", "sans-serif"]))
///     .add("primary", ColorValue::new("#1a1a1a"))
///     .add("accent", ColorValue::new("#2563eb"));
///
/// assert!(tokens.has("accent"));
/// assert!(tokens.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    /// Font roles, keyed by logical name (e.g. "sans").
    #[serde(
        rename = "fontFamily",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    font_family: IndexMap<String, FontStack>,

    /// Color roles, keyed by logical name (e.g. "primary").
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    colors: IndexMap<String, ColorValue>,
}

impl TokenSet {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token, returning the updated set for chaining.
    ///
    /// The value can be a [`ColorValue`] or a [`FontStack`]; it lands in the
    /// corresponding mapping. Registering a role twice in the same mapping
    /// replaces the earlier value.
    pub fn add<V: Into<TokenValue>>(mut self, role: &str, value: V) -> Self {
        match value.into() {
            TokenValue::Color(color) => {
                self.colors.insert(role.to_string(), color);
            }
            TokenValue::FontFamily(stack) => {
                self.font_family.insert(role.to_string(), stack);
            }
        }
        self
    }

    /// Returns `true` if a token is registered under the role.
    pub fn has(&self, role: &str) -> bool {
        self.colors.contains_key(role) || self.font_family.contains_key(role)
    }

    /// Looks up a token by role across both mappings.
    ///
    /// # Errors
    ///
    /// Returns [`TokenLookupError::UnknownRole`] when the role is undefined.
    /// That error is recoverable; consumers treat it as "use the framework
    /// default" rather than as fatal.
    pub fn get(&self, role: &str) -> Result<TokenValue, TokenLookupError> {
        if let Some(color) = self.colors.get(role) {
            return Ok(TokenValue::Color(color.clone()));
        }
        if let Some(stack) = self.font_family.get(role) {
            return Ok(TokenValue::FontFamily(stack.clone()));
        }
        Err(self.unknown_role(role))
    }

    /// Looks up a color role.
    ///
    /// # Errors
    ///
    /// Returns [`TokenLookupError::KindMismatch`] if the role holds a font
    /// stack, or [`TokenLookupError::UnknownRole`] if it is undefined.
    pub fn color(&self, role: &str) -> Result<&ColorValue, TokenLookupError> {
        if let Some(color) = self.colors.get(role) {
            return Ok(color);
        }
        if self.font_family.contains_key(role) {
            return Err(TokenLookupError::KindMismatch {
                role: role.to_string(),
                expected: TokenKind::Color,
                found: TokenKind::FontFamily,
            });
        }
        Err(self.unknown_role(role))
    }

    /// Looks up a font role.
    ///
    /// # Errors
    ///
    /// Returns [`TokenLookupError::KindMismatch`] if the role holds a color,
    /// or [`TokenLookupError::UnknownRole`] if it is undefined.
    pub fn font_family(&self, role: &str) -> Result<&FontStack, TokenLookupError> {
        if let Some(stack) = self.font_family.get(role) {
            return Ok(stack);
        }
        if self.colors.contains_key(role) {
            return Err(TokenLookupError::KindMismatch {
                role: role.to_string(),
                expected: TokenKind::FontFamily,
                found: TokenKind::Color,
            });
        }
        Err(self.unknown_role(role))
    }

    /// Returns an iterator over all registered role names.
    ///
    /// Font roles come first, then color roles, each in registration order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.font_family
            .keys()
            .map(String::as_str)
            .chain(self.colors.keys().map(String::as_str))
    }

    /// Returns an iterator over the color roles in registration order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.colors.iter().map(|(role, color)| (role.as_str(), color))
    }

    /// Returns an iterator over the font roles in registration order.
    pub fn font_families(&self) -> impl Iterator<Item = (&str, &FontStack)> {
        self.font_family
            .iter()
            .map(|(role, stack)| (role.as_str(), stack))
    }

    /// Returns the number of registered tokens.
    pub fn len(&self) -> usize {
        self.colors.len() + self.font_family.len()
    }

    /// Returns `true` if no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.font_family.is_empty()
    }

    /// Validates every registered token.
    ///
    /// Checks, in order: no role is registered in both mappings, every color
    /// value satisfies the hex-or-named grammar, and every font stack is
    /// non-empty. The first failure is returned.
    pub fn validate(&self) -> Result<(), TokenValidationError> {
        for role in self.font_family.keys() {
            if self.colors.contains_key(role) {
                return Err(TokenValidationError::RoleCollision { role: role.clone() });
            }
        }
        for (role, color) in &self.colors {
            if !color.is_valid() {
                return Err(TokenValidationError::InvalidColor {
                    role: role.clone(),
                    value: color.as_str().to_string(),
                });
            }
        }
        for (role, stack) in &self.font_family {
            if stack.is_empty() {
                return Err(TokenValidationError::EmptyFontStack { role: role.clone() });
            }
        }
        Ok(())
    }

    /// Merges `overrides` into this set, returning the combined set.
    ///
    /// Entries from `overrides` win on role conflicts within a mapping;
    /// roles defined only here are kept. This is the layering the consumer
    /// applies when authored tokens extend its built-in defaults.
    pub fn merge(mut self, overrides: TokenSet) -> TokenSet {
        for (role, stack) in overrides.font_family {
            self.font_family.insert(role, stack);
        }
        for (role, color) in overrides.colors {
            self.colors.insert(role, color);
        }
        self
    }

    fn unknown_role(&self, role: &str) -> TokenLookupError {
        TokenLookupError::UnknownRole {
            role: role.to_string(),
            available: self.roles().map(String::from).collect(),
        }
    }
}
