//! Route patterns and captured parameters.

use crate::error::RoutingError;
use daily_verse_core::path::{is_absolute, trim_trailing_slash};
use std::fmt;
use std::str::FromStr;

/// A declared route path.
///
/// Routes are either exact paths or paths whose trailing segment is a
/// named, free-form parameter. Any non-empty segment in the parameter
/// position matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoutePattern {
    /// Matches one path exactly, such as `/guide`.
    Exact(String),
    /// Matches `prefix/<value>` for any non-empty single segment `<value>`,
    /// such as `/poem/:id`.
    Parameterized {
        /// Everything before the parameter segment, without a trailing slash.
        prefix: String,
        /// Parameter name, without the leading `:`.
        param: String,
    },
}

impl RoutePattern {
    /// Parses a route declaration such as `/`, `/login`, or `/poem/:id`.
    pub fn parse(pattern: &str) -> Result<Self, RoutingError> {
        let invalid = |reason: &str| RoutingError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !is_absolute(pattern) {
            return Err(invalid("must begin with '/'"));
        }

        let trimmed = trim_trailing_slash(pattern);
        let (prefix, last) = match trimmed.rfind('/') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
            None => return Err(invalid("must begin with '/'")),
        };

        if prefix.split('/').any(|segment| segment.starts_with(':')) {
            return Err(invalid("parameters are only supported in the last segment"));
        }

        match last.strip_prefix(':') {
            Some("") => Err(invalid("parameter name is empty")),
            Some(param) => Ok(Self::Parameterized {
                prefix: prefix.to_string(),
                param: param.to_string(),
            }),
            None => Ok(Self::Exact(trimmed.to_string())),
        }
    }

    /// Tests a normalized path against this pattern.
    ///
    /// Returns the captured parameters on a match. The path must already be
    /// stripped of query, fragment, and trailing slash.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<Params> {
        match self {
            Self::Exact(exact) => (exact == path).then(Params::default),
            Self::Parameterized { prefix, param } => {
                let value = path.strip_prefix(prefix.as_str())?.strip_prefix('/')?;
                if value.is_empty() || value.contains('/') {
                    return None;
                }
                let mut params = Params::default();
                params.insert(param.clone(), value.to_string());
                Some(params)
            }
        }
    }

    /// Returns true if this pattern captures a parameter.
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized { .. })
    }
}

impl FromStr for RoutePattern {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => f.write_str(path),
            Self::Parameterized { prefix, param } => write!(f, "{prefix}/:{param}"),
        }
    }
}

/// Parameters captured while matching a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Returns the value captured for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn insert(&mut self, name: String, value: String) {
        self.entries.push((name, value));
    }
}
