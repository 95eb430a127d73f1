//! Loading configuration documents from authored text and files.
//!
//! Configurations are authored in JSON or YAML. File loading dispatches on
//! extension ([`SUPPORTED_EXTENSIONS`]); every path through this module
//! validates the document before handing it out, so a successfully loaded
//! [`ThemeConfig`] is always usable.

use std::path::{Path, PathBuf};

use crate::theme::ThemeConfig;
use crate::token::TokenValidationError;

/// Recognized configuration file extensions.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml"];

/// Error type for loading a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Failed to read the file from disk.
    Read { path: PathBuf, message: String },
    /// The text is not well-formed for its format.
    Parse {
        format: &'static str,
        message: String,
    },
    /// The file extension is not a recognized configuration format.
    UnsupportedExtension { path: PathBuf },
    /// The document parsed but failed token validation.
    Invalid(TokenValidationError),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Read { path, message } => {
                write!(f, "failed to read '{}': {}", path.display(), message)
            }
            SourceError::Parse { format, message } => {
                write!(f, "failed to parse {} document: {}", format, message)
            }
            SourceError::UnsupportedExtension { path } => {
                write!(
                    f,
                    "unsupported configuration extension for '{}' (expected one of: {})",
                    path.display(),
                    SUPPORTED_EXTENSIONS.join(", ")
                )
            }
            SourceError::Invalid(err) => {
                write!(f, "invalid configuration: {}", err)
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl From<TokenValidationError> for SourceError {
    fn from(err: TokenValidationError) -> Self {
        SourceError::Invalid(err)
    }
}

/// Parses and validates a JSON configuration document.
///
/// # Example
///
/// ```rust
/// let config = swatchbook::from_json_str(
///     r##"{"theme": {"extend": {"colors": {"primary": "#1a1a1a"}}}}"##,
/// )
/// .unwrap();
/// assert_eq!(config.color("primary").unwrap().as_str(), "#1a1a1a");
/// ```
pub fn from_json_str(source: &str) -> Result<ThemeConfig, SourceError> {
    let config: ThemeConfig = serde_json::from_str(source).map_err(|e| SourceError::Parse {
        format: "json",
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Parses and validates a YAML configuration document.
pub fn from_yaml_str(source: &str) -> Result<ThemeConfig, SourceError> {
    let config: ThemeConfig = serde_yaml::from_str(source).map_err(|e| SourceError::Parse {
        format: "yaml",
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses, and validates a configuration file.
///
/// The format is chosen by extension: `.json`, `.yaml`, or `.yml`. The
/// extension is checked before any I/O happens.
///
/// # Errors
///
/// Returns [`SourceError::UnsupportedExtension`] for other extensions,
/// [`SourceError::Read`] when the file cannot be read, and the parse or
/// validation errors of the underlying format otherwise.
pub fn from_path(path: impl AsRef<Path>) -> Result<ThemeConfig, SourceError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    let extension = SUPPORTED_EXTENSIONS
        .iter()
        .find(|ext| path_str.ends_with(*ext))
        .ok_or_else(|| SourceError::UnsupportedExtension {
            path: path.to_path_buf(),
        })?;

    let source = std::fs::read_to_string(path).map_err(|e| SourceError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match *extension {
        ".json" => from_json_str(&source),
        _ => from_yaml_str(&source),
    }
}
