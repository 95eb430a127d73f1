//! The configuration document and the built-in reference document.
//!
//! This module provides:
//!
//! - [`ThemeConfig`]: The immutable design-token document handed to the
//!   styling build tool
//! - [`reference`]: The built-in document, constructed once and shared by
//!   `&'static` reference

mod config;
mod reference;

pub use config::ThemeConfig;
pub use reference::reference;
