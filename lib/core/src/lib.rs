//! Core types and utilities for daily-verse.
//!
//! This crate provides the foundational types shared by the routing,
//! session, and web crates: the error `Result` alias, the authentication
//! status seam consulted by navigation guards, and navigation path helpers.

pub mod auth;
pub mod error;
pub mod id;
pub mod path;

pub use auth::AuthStatus;
pub use error::Result;
pub use id::{ParsePoemIdError, PoemId};
