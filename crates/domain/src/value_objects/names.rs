//! Validated text newtype
//!
//! `NonEmptyString` guarantees by construction that the text:
//! - Contains at least one non-whitespace character
//! - Is trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated non-empty text value (trimmed, at least one visible character)
///
/// # Example
///
/// ```
/// use coursekit_domain::value_objects::NonEmptyString;
///
/// let name = NonEmptyString::new("  Go for Production ").unwrap();
/// assert_eq!(name.as_str(), "Go for Production");
/// assert!(NonEmptyString::new(" \t").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Create a new validated text value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the text is empty after trimming.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("text cannot be empty or blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<NonEmptyString> for String {
    fn from(text: NonEmptyString) -> String {
        text.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_with_visible_characters() {
        let text = NonEmptyString::new("Go for Production").unwrap();
        assert_eq!(text.as_str(), "Go for Production");
        assert_eq!(text.to_string(), "Go for Production");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let text = NonEmptyString::new("\n  Rust 101\t").unwrap();
        assert_eq!(text.as_str(), "Rust 101");
    }

    #[test]
    fn rejects_empty_and_blank() {
        for input in ["", " ", "\t\n", "   \r\n  "] {
            let err = NonEmptyString::new(input).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{input:?}");
        }
    }

    #[test]
    fn equality_is_by_content() {
        assert_eq!(
            NonEmptyString::new("abc").unwrap(),
            NonEmptyString::new(" abc ").unwrap()
        );
        assert_ne!(
            NonEmptyString::new("abc").unwrap(),
            NonEmptyString::new("abd").unwrap()
        );
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let text: NonEmptyString = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(text.as_str(), "hello");
        assert!(serde_json::from_str::<NonEmptyString>("\"   \"").is_err());
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"hello\"");
    }
}
