//! Identifier types for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePoemIdError {
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParsePoemIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse PoemId: {}", self.reason)
    }
}

impl std::error::Error for ParsePoemIdError {}

/// Identifier of a poem, as captured from the `/poem/:id` route.
///
/// Poem identifiers are free-form: the router accepts any non-empty path
/// segment and leaves interpretation to the page that loads the poem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoemId(String);

impl PoemId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PoemId {
    type Err = ParsePoemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePoemIdError {
                reason: "identifier is empty".to_string(),
            });
        }
        if s.contains('/') {
            return Err(ParsePoemIdError {
                reason: format!("identifier '{s}' spans more than one path segment"),
            });
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_id() {
        let id: PoemId = "42".parse().expect("should parse");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn parses_free_form_id() {
        let id: PoemId = "jing-ye-si".parse().expect("should parse");
        assert_eq!(id.as_str(), "jing-ye-si");
    }

    #[test]
    fn rejects_empty() {
        let err = "".parse::<PoemId>().unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_multiple_segments() {
        assert!("42/comments".parse::<PoemId>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: PoemId = "7".parse().expect("should parse");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"7\"");
    }
}
