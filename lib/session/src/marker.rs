//! The session marker.

use crate::config::SessionConfig;
use crate::error::StoreError;
use crate::store::SessionStore;
use daily_verse_core::AuthStatus;
use daily_verse_core::Result;
use tracing::{debug, warn};

/// Key the marker is stored under unless configured otherwise.
pub const DEFAULT_SESSION_KEY: &str = "user";

/// Presence flag for a signed-in user, kept in a persistent store.
///
/// The stored value is whatever the sign-in flow saved (the user record
/// returned by the login API). Only its presence is ever checked.
#[derive(Debug, Clone)]
pub struct SessionMarker<S> {
    store: S,
    key: String,
}

impl<S: SessionStore> SessionMarker<S> {
    /// Creates a marker stored under [`DEFAULT_SESSION_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SESSION_KEY)
    }

    /// Creates a marker stored under a custom key.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Creates a marker using the configured key.
    #[must_use]
    pub fn from_config(store: S, config: &SessionConfig) -> Self {
        Self::with_key(store, config.key.clone())
    }

    /// Returns true if the marker is stored.
    pub fn is_present(&self) -> Result<bool, StoreError> {
        self.store.contains(&self.key)
    }

    /// Returns the stored value, if any.
    pub fn value(&self) -> Result<Option<String>, StoreError> {
        self.store.get(&self.key)
    }

    /// Records a signed-in user.
    pub fn sign_in(&self, value: &str) -> Result<(), StoreError> {
        self.store.set(&self.key, value)?;
        debug!(key = %self.key, "session marker stored");
        Ok(())
    }

    /// Clears the signed-in user.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)?;
        debug!(key = %self.key, "session marker cleared");
        Ok(())
    }

    /// Returns the key the marker is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: SessionStore> AuthStatus for SessionMarker<S> {
    /// A store that cannot be read counts as signed out.
    fn is_authenticated(&self) -> bool {
        match self.is_present() {
            Ok(present) => present,
            Err(e) => {
                warn!(error = %e, key = %self.key, "failed to read session marker");
                false
            }
        }
    }
}
