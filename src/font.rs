//! Font-family stacks.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered font-family fallback list.
///
/// The first entry is the primary family; the rest are fallbacks, tried in
/// order by the consumer. Order is preserved through construction,
/// serialization, and reparse. A stack may be authored either as a list or
/// as a bare string, which deserializes to a one-element stack; it always
/// serializes back as a list.
///
/// # Example
///
/// ```rust
/// use swatchbook::FontStack;
///
/// let sans = FontStack::new(["Inter", "sans-serif"]);
/// assert_eq!(sans.primary(), Some("Inter"));
/// assert_eq!(sans.families(), ["Inter", "sans-serif"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStack(Vec<String>);

impl FontStack {
    /// Builds a stack from families in fallback order.
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(families.into_iter().map(Into::into).collect())
    }

    /// Returns the families in fallback order.
    pub fn families(&self) -> &[String] {
        &self.0
    }

    /// Returns the primary family, if the stack is non-empty.
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Returns the number of families in the stack.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the stack has no families.
    ///
    /// Empty stacks are rejected by document validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for FontStack {
    fn from(families: Vec<String>) -> Self {
        Self(families)
    }
}

impl Serialize for FontStack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

// Accepts either `"Inter"` or `["Inter", "sans-serif"]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FontStackRepr {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for FontStack {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match FontStackRepr::deserialize(deserializer)? {
            FontStackRepr::One(family) => Self(vec![family]),
            FontStackRepr::Many(families) => Self(families),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let stack = FontStack::new(["Inter", "Helvetica", "sans-serif"]);
        assert_eq!(stack.families(), ["Inter", "Helvetica", "sans-serif"]);
        assert_eq!(stack.primary(), Some("Inter"));
    }

    #[test]
    fn test_empty_stack() {
        let stack = FontStack::new(Vec::<String>::new());
        assert!(stack.is_empty());
        assert_eq!(stack.primary(), None);
    }

    #[test]
    fn test_deserialize_list() {
        let stack: FontStack = serde_json::from_str(r#"["Inter", "sans-serif"]"#).unwrap();
        assert_eq!(stack, FontStack::new(["Inter", "sans-serif"]));
    }

    #[test]
    fn test_deserialize_string_shorthand() {
        let stack: FontStack = serde_json::from_str(r#""Inter""#).unwrap();
        assert_eq!(stack, FontStack::new(["Inter"]));
    }

    #[test]
    fn test_serializes_as_list() {
        let stack = FontStack::new(["Inter"]);
        assert_eq!(serde_json::to_string(&stack).unwrap(), r#"["Inter"]"#);
    }
}
