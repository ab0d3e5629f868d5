//! Session marker wiring for the browser application.

use daily_verse_session::{SessionConfig, SessionMarker};
use leptos::prelude::*;

/// Store backing the marker in the browser bundle.
#[cfg(feature = "csr")]
pub type AppStore = daily_verse_session::LocalStorageStore;

/// Store backing the marker outside the browser: a JSON file at
/// [`SessionConfig::store_path`].
#[cfg(not(feature = "csr"))]
pub type AppStore = daily_verse_session::FileStore;

/// The session marker type used throughout the app.
pub type AppMarker = SessionMarker<AppStore>;

/// Creates the app's session marker.
#[cfg(feature = "csr")]
#[must_use]
pub fn app_marker(config: &SessionConfig) -> AppMarker {
    SessionMarker::from_config(AppStore::default(), config)
}

/// Creates the app's session marker.
#[cfg(not(feature = "csr"))]
#[must_use]
pub fn app_marker(config: &SessionConfig) -> AppMarker {
    SessionMarker::from_config(AppStore::new(&config.store_path), config)
}

/// Returns the session marker provided by [`App`](crate::app::App).
pub fn use_session() -> AppMarker {
    expect_context::<AppMarker>()
}
