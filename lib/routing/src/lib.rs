//! Client-side routing for daily-verse.
//!
//! This crate provides:
//! - The route table (`RouteTable`, `RoutePattern`, `RouteMatch`)
//! - The navigation guard (`NavigationGuard`, `PublicPaths`, `GuardConfig`)
//! - The navigator that applies the guard before resolving (`Navigator`)
//!
//! # Matching model
//!
//! Routes are evaluated in declaration order and the first match wins.
//! Patterns are either exact paths or paths whose trailing segment is a
//! named parameter, such as `/poem/:id`.
//!
//! # Example
//!
//! ```
//! use daily_verse_routing::{GuardConfig, NavigationDecision, NavigationGuard, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route("/", "home")
//!     .route("/login", "login")
//!     .route("/poem/:id", "poem")
//!     .build()
//!     .expect("valid routes");
//!
//! let guard = NavigationGuard::new(GuardConfig::default(), false);
//! assert_eq!(
//!     guard.decide("/", None),
//!     NavigationDecision::Redirect { to: "/login".to_string() }
//! );
//!
//! let matched = table.resolve("/poem/42").expect("route exists");
//! assert_eq!(*matched.page(), "poem");
//! assert_eq!(matched.param("id"), Some("42"));
//! ```

pub mod error;
pub mod guard;
pub mod navigator;
pub mod pattern;
pub mod table;

// Re-export main types at crate root
pub use error::RoutingError;
pub use guard::{GuardConfig, NavigationDecision, NavigationGuard, PublicPaths};
pub use navigator::{Navigation, NavigationState, Navigator};
pub use pattern::{Params, RoutePattern};
pub use table::{Route, RouteMatch, RouteTable, RouteTableBuilder};
