//! Error types for the routing crate.

use std::fmt;

/// Errors from building or querying a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// No declared route matches the path.
    NoMatch { path: String },
    /// The navigation target is not an absolute in-app path.
    InvalidPath { path: String },
    /// A route declaration could not be parsed.
    InvalidPattern { pattern: String, reason: String },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch { path } => {
                write!(f, "no route matches '{path}'")
            }
            Self::InvalidPath { path } => {
                write!(f, "invalid navigation path '{path}': must begin with '/'")
            }
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid route pattern '{pattern}': {reason}")
            }
        }
    }
}

impl std::error::Error for RoutingError {}
