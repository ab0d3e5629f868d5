//! Drives navigation attempts through the guard and the route table.
//!
//! A navigation attempt is pending only for the duration of
//! [`Navigator::navigate`]: the guard decides in one synchronous step, the
//! effective path is resolved, and the attempt ends either allowed or
//! redirected. There are no retries and nothing is awaited.

use crate::error::RoutingError;
use crate::guard::{NavigationDecision, NavigationGuard};
use crate::pattern::Params;
use crate::table::RouteTable;
use daily_verse_core::AuthStatus;
use daily_verse_core::Result;
use tracing::{debug, instrument};

/// Terminal state of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    /// The requested destination was reached.
    Allowed,
    /// The guard sent the user elsewhere; `requested` was abandoned.
    Redirected { requested: String },
}

/// A completed navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation<P> {
    from: Option<String>,
    to: String,
    state: NavigationState,
    page: P,
    params: Params,
}

impl<P> Navigation<P> {
    /// Returns the path the user navigated away from, or `None` on the
    /// initial load.
    #[must_use]
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    /// Returns the path the user ended up on.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns how the attempt ended.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Returns true if the guard redirected this attempt.
    #[must_use]
    pub fn was_redirected(&self) -> bool {
        matches!(self.state, NavigationState::Redirected { .. })
    }

    /// Returns the page rendered for the effective path.
    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Returns parameters captured from the effective path.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Applies the navigation guard, then resolves the resulting path.
#[derive(Debug, Clone)]
pub struct Navigator<P, A> {
    table: RouteTable<P>,
    guard: NavigationGuard<A>,
    current: Option<String>,
}

impl<P, A> Navigator<P, A>
where
    P: Clone + std::fmt::Debug,
    A: AuthStatus,
{
    /// Creates a navigator that has not loaded any page yet.
    #[must_use]
    pub fn new(table: RouteTable<P>, guard: NavigationGuard<A>) -> Self {
        Self {
            table,
            guard,
            current: None,
        }
    }

    /// Attempts to navigate to `to`.
    ///
    /// On success the navigator's current path becomes the effective path,
    /// which is `to` when allowed and the guard's redirect target otherwise.
    ///
    /// # Errors
    ///
    /// Returns the route table's error if the effective path does not
    /// resolve. The current path is left unchanged in that case.
    #[instrument(skip(self), fields(from = self.current.as_deref()))]
    pub fn navigate(&mut self, to: &str) -> Result<Navigation<P>, RoutingError> {
        let from = self.current.clone();

        let (effective, state) = match self.guard.decide(to, from.as_deref()) {
            NavigationDecision::Allow => (to.to_string(), NavigationState::Allowed),
            NavigationDecision::Redirect { to: target } => (
                target,
                NavigationState::Redirected {
                    requested: to.to_string(),
                },
            ),
        };

        let matched = self.table.resolve(&effective)?;
        let navigation = Navigation {
            from,
            to: effective.clone(),
            state,
            page: matched.page().clone(),
            params: matched.params().clone(),
        };

        debug!(to = %effective, page = ?navigation.page, "navigation complete");
        self.current = Some(effective);
        Ok(navigation)
    }

    /// Returns the current path, or `None` before the initial load.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns the navigation guard.
    #[must_use]
    pub fn guard(&self) -> &NavigationGuard<A> {
        &self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::GuardConfig;
    use std::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Page {
        Home,
        Login,
        Poem,
    }

    struct Toggle(Cell<bool>);

    impl AuthStatus for Toggle {
        fn is_authenticated(&self) -> bool {
            self.0.get()
        }
    }

    fn navigator(signed_in: bool) -> Navigator<Page, Toggle> {
        let table = RouteTable::builder()
            .route("/", Page::Home)
            .route("/login", Page::Login)
            .route("/poem/:id", Page::Poem)
            .build()
            .expect("valid routes");
        Navigator::new(
            table,
            NavigationGuard::new(GuardConfig::default(), Toggle(Cell::new(signed_in))),
        )
    }

    #[test]
    fn initial_load_has_no_origin() {
        let mut nav = navigator(true);
        assert_eq!(nav.current(), None);
        let navigation = nav.navigate("/").expect("navigate");
        assert_eq!(navigation.from(), None);
        assert_eq!(navigation.state(), &NavigationState::Allowed);
        assert_eq!(nav.current(), Some("/"));
    }

    #[test]
    fn signed_out_initial_load_lands_on_login() {
        let mut nav = navigator(false);
        let navigation = nav.navigate("/").expect("navigate");
        assert!(navigation.was_redirected());
        assert_eq!(*navigation.page(), Page::Login);
        assert_eq!(navigation.to(), "/login");
        assert_eq!(
            navigation.state(),
            &NavigationState::Redirected {
                requested: "/".to_string()
            }
        );
        assert_eq!(nav.current(), Some("/login"));
    }

    #[test]
    fn origin_tracks_previous_navigation() {
        let mut nav = navigator(true);
        nav.navigate("/").expect("navigate");
        let navigation = nav.navigate("/poem/42").expect("navigate");
        assert_eq!(navigation.from(), Some("/"));
        assert_eq!(*navigation.page(), Page::Poem);
        assert_eq!(navigation.params().get("id"), Some("42"));
    }

    #[test]
    fn sign_in_between_navigations_takes_effect() {
        let mut nav = navigator(false);
        assert!(nav.navigate("/poem/1").expect("navigate").was_redirected());

        nav.guard().auth().0.set(true);
        let navigation = nav.navigate("/poem/1").expect("navigate");
        assert!(!navigation.was_redirected());
        assert_eq!(navigation.from(), Some("/login"));
    }

    #[test]
    fn unmatched_path_keeps_current_location() {
        let mut nav = navigator(true);
        nav.navigate("/").expect("navigate");
        let err = nav.navigate("/missing").unwrap_err();
        assert!(err.to_string().contains("no route"));
        assert_eq!(nav.current(), Some("/"));
    }

    #[test]
    fn missing_login_route_surfaces_no_match() {
        let table = RouteTable::builder()
            .route("/", Page::Home)
            .build()
            .expect("valid routes");
        let mut nav = Navigator::new(table, NavigationGuard::new(GuardConfig::default(), false));
        assert!(nav.navigate("/").is_err());
        assert_eq!(nav.current(), None);
    }
}
