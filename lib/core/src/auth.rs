//! Authentication status seam.
//!
//! Navigation guards never read session state directly. They are handed an
//! [`AuthStatus`] provider instead, so the browser session marker, a file
//! backed marker, or a fixed value in tests can all stand behind the same
//! decision logic.

use std::sync::Arc;

/// Answers whether the current user counts as signed in.
pub trait AuthStatus {
    /// Returns true if a user is authenticated.
    fn is_authenticated(&self) -> bool;
}

impl AuthStatus for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

impl<T: AuthStatus + ?Sized> AuthStatus for &T {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

impl<T: AuthStatus + ?Sized> AuthStatus for Arc<T> {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

impl<T: AuthStatus + ?Sized> AuthStatus for Box<T> {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}
