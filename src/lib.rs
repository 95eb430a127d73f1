//! Typed, validated design tokens for styling build pipelines.
//!
//! `swatchbook` holds a design-system configuration — a named color palette
//! and ordered font-family stacks — as an immutable, validated value that a
//! styling build tool reads. The document is constructed once (from the
//! built-in literal, a fluent builder, or an authored JSON/YAML file),
//! validated up front, and then shared by reference for the life of the
//! process.
//!
//! # Example
//!
//! ```rust
//! use swatchbook::{ColorValue, FontStack, ThemeConfig};
//!
//! let config = ThemeConfig::new()
//!     .add("sans", FontStack::new(["Inter", "sans-serif"]))
//!     .add("primary", ColorValue::new("#1a1a1a"));
//! config.validate().unwrap();
//!
//! assert_eq!(config.color("primary").unwrap().as_str(), "#1a1a1a");
//! assert_eq!(config.font_family("sans").unwrap().primary(), Some("Inter"));
//! ```
//!
//! Lookups on roles that were never registered fail with a recoverable
//! [`TokenLookupError::UnknownRole`]; consumers are expected to fall through
//! to their own defaults rather than abort.

mod color;
mod font;
pub mod source;
mod theme;
mod token;

pub use color::{ColorKind, ColorValue};
pub use font::FontStack;
pub use source::{from_json_str, from_path, from_yaml_str, SourceError, SUPPORTED_EXTENSIONS};
pub use theme::{reference, ThemeConfig};
pub use token::{TokenKind, TokenLookupError, TokenSet, TokenValidationError, TokenValue};
