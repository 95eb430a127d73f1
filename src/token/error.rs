//! Token validation and lookup errors.

use super::value::TokenKind;

/// Error returned when document validation fails.
///
/// Validation runs at construction time; a document that fails validation
/// must be corrected before it can be handed to a consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    /// A color role holds a value that is not valid hex or named-color syntax
    InvalidColor { role: String, value: String },
    /// A font role maps to an empty family list
    EmptyFontStack { role: String },
    /// A role is registered as both a color and a font family
    RoleCollision { role: String },
}

impl std::fmt::Display for TokenValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValidationError::InvalidColor { role, value } => {
                write!(
                    f,
                    "color '{}' has invalid value '{}' (expected '#'-prefixed hex or a CSS color name)",
                    role, value
                )
            }
            TokenValidationError::EmptyFontStack { role } => {
                write!(f, "font role '{}' has an empty family list", role)
            }
            TokenValidationError::RoleCollision { role } => {
                write!(
                    f,
                    "role '{}' is registered as both a color and a font family",
                    role
                )
            }
        }
    }
}

impl std::error::Error for TokenValidationError {}

/// Error returned when a role lookup fails.
///
/// Unlike validation errors these are recoverable: a consumer looking up an
/// undefined role is expected to fall through to its own default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenLookupError {
    /// No token is registered under the requested role
    UnknownRole {
        role: String,
        available: Vec<String>,
    },
    /// The role exists but holds a token of a different kind
    KindMismatch {
        role: String,
        expected: TokenKind,
        found: TokenKind,
    },
}

impl std::fmt::Display for TokenLookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenLookupError::UnknownRole { role, available } => {
                if available.is_empty() {
                    write!(f, "no token registered for role '{}'", role)
                } else {
                    write!(
                        f,
                        "no token registered for role '{}' (known roles: {})",
                        role,
                        available.join(", ")
                    )
                }
            }
            TokenLookupError::KindMismatch {
                role,
                expected,
                found,
            } => {
                write!(f, "role '{}' is a {}, not a {}", role, found, expected)
            }
        }
    }
}

impl std::error::Error for TokenLookupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_error_display() {
        let err = TokenValidationError::InvalidColor {
            role: "primary".to_string(),
            value: "#12345".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("primary"));
        assert!(msg.contains("#12345"));
    }

    #[test]
    fn test_empty_font_stack_error_display() {
        let err = TokenValidationError::EmptyFontStack {
            role: "sans".to_string(),
        };
        assert!(err.to_string().contains("sans"));
    }

    #[test]
    fn test_role_collision_error_display() {
        let err = TokenValidationError::RoleCollision {
            role: "primary".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("primary"));
        assert!(msg.contains("both"));
    }

    #[test]
    fn test_unknown_role_error_display() {
        let err = TokenLookupError::UnknownRole {
            role: "brand".to_string(),
            available: vec!["primary".to_string(), "accent".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("brand"));
        assert!(msg.contains("primary, accent"));
    }

    #[test]
    fn test_unknown_role_error_display_without_roles() {
        let err = TokenLookupError::UnknownRole {
            role: "brand".to_string(),
            available: vec![],
        };
        assert_eq!(err.to_string(), "no token registered for role 'brand'");
    }

    #[test]
    fn test_kind_mismatch_error_display() {
        let err = TokenLookupError::KindMismatch {
            role: "sans".to_string(),
            expected: TokenKind::Color,
            found: TokenKind::FontFamily,
        };
        assert_eq!(err.to_string(), "role 'sans' is a font family, not a color");
    }
}
