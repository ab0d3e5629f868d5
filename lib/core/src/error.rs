//! Error handling foundation for daily-verse.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each crate defines its own domain error enum in its own error module and
//! returns `Result<T, ThatError>` from fallible operations; `?` lifts a bare
//! domain error into a report.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
