//! Session marker persistence for daily-verse.
//!
//! A signed-in user is represented by a single opaque value stored under a
//! fixed key (`"user"`) in a persistent key-value store. Presence of the
//! value means signed in; its contents are never interpreted here.
//!
//! This crate provides:
//! - The `SessionStore` trait and its backends (`MemoryStore`, `FileStore`,
//!   and `LocalStorageStore` with the `local-storage` feature)
//! - `SessionMarker`, which implements `AuthStatus` for navigation guards
//!
//! # Example
//!
//! ```
//! use daily_verse_core::AuthStatus;
//! use daily_verse_session::{MemoryStore, SessionMarker};
//!
//! let marker = SessionMarker::new(MemoryStore::new());
//! assert!(!marker.is_authenticated());
//!
//! marker.sign_in(r#"{"username":"li_bai"}"#).expect("store available");
//! assert!(marker.is_authenticated());
//!
//! marker.sign_out().expect("store available");
//! assert!(!marker.is_authenticated());
//! ```

pub mod config;
pub mod error;
pub mod marker;
pub mod store;

pub use config::SessionConfig;
pub use error::StoreError;
pub use marker::{DEFAULT_SESSION_KEY, SessionMarker};
#[cfg(feature = "local-storage")]
pub use store::LocalStorageStore;
pub use store::{FileStore, MemoryStore, SessionStore};
