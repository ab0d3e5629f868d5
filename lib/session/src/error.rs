//! Error types for session stores.

use std::fmt;

/// Errors from reading or writing a session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store cannot be reached (e.g. storage disabled in the browser).
    Unavailable { details: String },
    /// Reading or writing the store file failed.
    Io { path: String, details: String },
    /// The store file exists but does not hold a JSON object of strings.
    Corrupt { path: String, details: String },
    /// The store contents could not be serialized.
    Serialization { details: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { details } => {
                write!(f, "session store unavailable: {details}")
            }
            Self::Io { path, details } => {
                write!(f, "session store I/O error at '{path}': {details}")
            }
            Self::Corrupt { path, details } => {
                write!(f, "session store at '{path}' is corrupt: {details}")
            }
            Self::Serialization { details } => {
                write!(f, "failed to serialize session store: {details}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
