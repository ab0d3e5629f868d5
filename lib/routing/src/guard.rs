//! The navigation guard.
//!
//! Every navigation attempt, including the initial page load, passes
//! through [`NavigationGuard`] before a route is resolved. The guard lets
//! the navigation through when the destination is public or the user is
//! signed in, and otherwise sends the user to the login page.
//!
//! The guard is a UX gate only. It reads authentication status through the
//! injected [`AuthStatus`] provider and never mutates it.

use daily_verse_core::AuthStatus;
use daily_verse_core::path::{path_only, trim_trailing_slash};
use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Guard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GuardConfig {
    /// Where unauthenticated users are sent.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Paths reachable without signing in.
    /// The login path is always public, whether or not it is listed here.
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,

    /// Append the requested destination to the login redirect as
    /// `?redirect=<destination>`. Off by default: the destination is dropped.
    #[serde(default)]
    pub preserve_destination: bool,
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_public_paths() -> Vec<String> {
    vec![
        "/login".to_string(),
        "/register".to_string(),
        "/guide".to_string(),
    ]
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            public_paths: default_public_paths(),
            preserve_destination: false,
        }
    }
}

/// The set of paths exempt from authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicPaths {
    paths: BTreeSet<String>,
}

impl PublicPaths {
    /// Returns true if the navigation target's path is public.
    ///
    /// Query strings, fragments, and a trailing slash are ignored.
    #[must_use]
    pub fn contains(&self, target: &str) -> bool {
        self.paths.contains(normalize(target))
    }

    /// Iterates over the public paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Returns the number of public paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if no path is public.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PublicPaths {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|path| normalize(path.as_ref()).to_string())
                .collect(),
        }
    }
}

fn normalize(target: &str) -> &str {
    trim_trailing_slash(path_only(target))
}

/// What the guard decided for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Proceed to the requested destination unchanged.
    Allow,
    /// Abandon the requested destination and go to `to` instead.
    Redirect { to: String },
}

impl NavigationDecision {
    /// Returns true if the navigation proceeds unchanged.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target, if any.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Redirect { to } => Some(to),
        }
    }
}

/// Decides, before each route transition, whether it may proceed.
#[derive(Debug, Clone)]
pub struct NavigationGuard<A> {
    login_path: String,
    public_paths: PublicPaths,
    preserve_destination: bool,
    auth: A,
}

impl<A: AuthStatus> NavigationGuard<A> {
    /// Creates a guard from configuration and an authentication provider.
    #[must_use]
    pub fn new(config: GuardConfig, auth: A) -> Self {
        let login_path = normalize(&config.login_path).to_string();
        let public_paths = config
            .public_paths
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(login_path.as_str()))
            .collect();

        Self {
            login_path,
            public_paths,
            preserve_destination: config.preserve_destination,
            auth,
        }
    }

    /// Returns true if reaching `to` requires a signed-in user.
    #[must_use]
    pub fn requires_auth(&self, to: &str) -> bool {
        !self.public_paths.contains(to)
    }

    /// Decides whether the transition from `from` to `to` may proceed.
    ///
    /// `from` is `None` on the initial load. The decision depends only on the
    /// destination and on whether the user is signed in.
    #[must_use]
    pub fn decide(&self, to: &str, from: Option<&str>) -> NavigationDecision {
        let auth_required = self.requires_auth(to);
        let decision = if auth_required && !self.auth.is_authenticated() {
            NavigationDecision::Redirect {
                to: self.login_redirect(to),
            }
        } else {
            NavigationDecision::Allow
        };

        debug!(to, from, auth_required, decision = ?decision, "navigation guard decision");
        decision
    }

    /// Runs the guard with a continuation.
    ///
    /// `next` receives the decision and is called exactly once, before this
    /// method returns.
    pub fn before_each<F>(&self, to: &str, from: Option<&str>, next: F)
    where
        F: FnOnce(NavigationDecision),
    {
        next(self.decide(to, from));
    }

    /// Returns the login path.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Returns the public allow-list.
    #[must_use]
    pub fn public_paths(&self) -> &PublicPaths {
        &self.public_paths
    }

    /// Returns the authentication provider.
    #[must_use]
    pub fn auth(&self) -> &A {
        &self.auth
    }

    fn login_redirect(&self, to: &str) -> String {
        if self.preserve_destination {
            format!("{}?redirect={}", self.login_path, urlencoding::encode(to))
        } else {
            self.login_path.clone()
        }
    }
}
