//! Page identifiers and the application's route declarations.

use daily_verse_core::Result;
use daily_verse_routing::{RouteTable, RoutingError};

/// Pages the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Poem of the day.
    Home,
    Login,
    Register,
    /// How to use the site. Reachable without signing in.
    Guide,
    /// Reading statistics for the signed-in user.
    Analysis,
    /// A single poem, selected by the `id` route parameter.
    PoemDetail,
}

impl Page {
    /// Returns the document title for this page.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Poem of the Day",
            Self::Login => "Sign in",
            Self::Register => "Register",
            Self::Guide => "Guide",
            Self::Analysis => "Analysis",
            Self::PoemDetail => "Poem",
        }
    }
}

/// Builds the application's route table.
///
/// Declaration order is precedence order.
pub fn app_routes() -> Result<RouteTable<Page>, RoutingError> {
    RouteTable::builder()
        .route("/", Page::Home)
        .route("/login", Page::Login)
        .route("/register", Page::Register)
        .route("/guide", Page::Guide)
        .route("/analysis", Page::Analysis)
        .route("/poem/:id", Page::PoemDetail)
        .build()
}
