//! The built-in reference document, shared process-wide.

use once_cell::sync::Lazy;

use super::config::ThemeConfig;

static REFERENCE: Lazy<ThemeConfig> =
    Lazy::new(|| ThemeConfig::load().expect("built-in document validates"));

/// Returns the built-in reference document.
///
/// The document is constructed and validated on first use, then shared by
/// `&'static` reference: construction happens-before every read, and since
/// no writer exists after construction, any number of threads may read it
/// without synchronization.
///
/// # Example
///
/// ```rust
/// let config = swatchbook::reference();
/// assert_eq!(config.color("accent").unwrap().as_str(), "#2563eb");
/// ```
pub fn reference() -> &'static ThemeConfig {
    &REFERENCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_shared() {
        assert!(std::ptr::eq(reference(), reference()));
    }

    #[test]
    fn test_reference_matches_load() {
        assert_eq!(*reference(), ThemeConfig::load().unwrap());
    }
}
