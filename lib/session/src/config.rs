//! Session configuration.

use crate::marker::DEFAULT_SESSION_KEY;
use serde::Deserialize;
use std::path::PathBuf;

/// Session-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Key under which the session marker is stored.
    #[serde(default = "default_key")]
    pub key: String,

    /// File used by [`FileStore`](crate::FileStore) outside the browser.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from("daily-verse-session.json")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            store_path: default_store_path(),
        }
    }
}
