//! The route table.
//!
//! A route table is an ordered list of `(pattern, page)` declarations built
//! once at startup. Resolution walks the list in declaration order and
//! returns the first route whose pattern matches; later declarations that
//! would also match are never consulted.

use crate::error::RoutingError;
use crate::pattern::{Params, RoutePattern};
use daily_verse_core::path::{is_absolute, path_only, trim_trailing_slash};
use daily_verse_core::Result;
use tracing::debug;

/// A single route declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<P> {
    pattern: RoutePattern,
    page: P,
}

impl<P> Route<P> {
    /// Creates a route from an already parsed pattern.
    #[must_use]
    pub fn new(pattern: RoutePattern, page: P) -> Self {
        Self { pattern, page }
    }

    /// Returns the route's pattern.
    #[must_use]
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Returns the page handle this route renders.
    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }
}

/// The outcome of resolving a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, P> {
    route: &'a Route<P>,
    path: String,
    params: Params,
}

impl<'a, P> RouteMatch<'a, P> {
    /// Returns the matched page handle.
    #[must_use]
    pub fn page(&self) -> &'a P {
        &self.route.page
    }

    /// Returns the pattern that matched.
    #[must_use]
    pub fn pattern(&self) -> &'a RoutePattern {
        &self.route.pattern
    }

    /// Returns the normalized path that was matched.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns all captured parameters.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns a single captured parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// An immutable, ordered set of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<P> {
    routes: Vec<Route<P>>,
}

impl<P> RouteTable<P> {
    /// Starts declaring a route table.
    #[must_use]
    pub fn builder() -> RouteTableBuilder<P> {
        RouteTableBuilder::default()
    }

    /// Creates a table from routes in precedence order.
    #[must_use]
    pub fn from_routes(routes: Vec<Route<P>>) -> Self {
        Self { routes }
    }

    /// Resolves a navigation target to the first matching route.
    ///
    /// Query strings, fragments, and a single trailing slash are ignored.
    /// Resolution is pure: the same target always yields the same result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the target does not begin with `/` and
    /// `NoMatch` if no declared route matches.
    pub fn resolve(&self, target: &str) -> Result<RouteMatch<'_, P>, RoutingError> {
        if !is_absolute(target) {
            return Err(RoutingError::InvalidPath {
                path: target.to_string(),
            }
            .into());
        }

        let path = trim_trailing_slash(path_only(target));
        for route in &self.routes {
            if let Some(params) = route.pattern.matches(path) {
                debug!(path, pattern = %route.pattern, "route resolved");
                return Ok(RouteMatch {
                    route,
                    path: path.to_string(),
                    params,
                });
            }
        }

        debug!(path, "no route matched");
        Err(RoutingError::NoMatch {
            path: path.to_string(),
        }
        .into())
    }

    /// Iterates over routes in precedence order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<P>> {
        self.routes.iter()
    }

    /// Returns the number of declared routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects route declarations and validates them all at once.
#[derive(Debug)]
pub struct RouteTableBuilder<P> {
    declarations: Vec<(String, P)>,
}

impl<P> Default for RouteTableBuilder<P> {
    fn default() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }
}

impl<P> RouteTableBuilder<P> {
    /// Declares a route. Earlier declarations take precedence.
    #[must_use]
    pub fn route(mut self, pattern: impl Into<String>, page: P) -> Self {
        self.declarations.push((pattern.into(), page));
        self
    }

    /// Parses every declaration and builds the table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` for the first declaration that fails to parse.
    pub fn build(self) -> Result<RouteTable<P>, RoutingError> {
        let mut routes = Vec::with_capacity(self.declarations.len());
        for (pattern, page) in self.declarations {
            let pattern = RoutePattern::parse(&pattern)?;
            routes.push(Route::new(pattern, page));
        }
        Ok(RouteTable::from_routes(routes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Page {
        Home,
        Login,
        Guide,
        Poem,
        Any,
    }

    fn table() -> RouteTable<Page> {
        RouteTable::builder()
            .route("/", Page::Home)
            .route("/login", Page::Login)
            .route("/guide", Page::Guide)
            .route("/poem/:id", Page::Poem)
            .build()
            .expect("valid routes")
    }

    #[test]
    fn resolves_exact_routes() {
        let table = table();
        assert_eq!(*table.resolve("/").expect("home").page(), Page::Home);
        assert_eq!(*table.resolve("/login").expect("login").page(), Page::Login);
        assert_eq!(*table.resolve("/guide").expect("guide").page(), Page::Guide);
    }

    #[test]
    fn resolves_poem_detail_with_id() {
        let table = table();
        let matched = table.resolve("/poem/42").expect("poem");
        assert_eq!(*matched.page(), Page::Poem);
        assert_eq!(matched.param("id"), Some("42"));
        assert_eq!(matched.pattern().to_string(), "/poem/:id");
        assert_eq!(matched.path(), "/poem/42");
    }

    #[test]
    fn ignores_query_fragment_and_trailing_slash() {
        let table = table();
        assert_eq!(*table.resolve("/guide/").expect("guide").page(), Page::Guide);
        let matched = table.resolve("/poem/7?from=home#verse").expect("poem");
        assert_eq!(matched.param("id"), Some("7"));
    }

    #[test]
    fn unknown_path_is_no_match() {
        let err = table().resolve("/nowhere").unwrap_err();
        assert!(err.to_string().contains("no route matches '/nowhere'"));
    }

    #[test]
    fn poem_without_id_is_no_match() {
        assert!(table().resolve("/poem").is_err());
        assert!(table().resolve("/poem/").is_err());
    }

    #[test]
    fn relative_path_is_invalid() {
        let err = table().resolve("guide").unwrap_err();
        assert!(err.to_string().contains("must begin with '/'"));
    }

    #[test]
    fn first_declared_match_wins() {
        let table = RouteTable::builder()
            .route("/poem/:id", Page::Poem)
            .route("/poem/featured", Page::Guide)
            .route("/:anything", Page::Any)
            .build()
            .expect("valid routes");

        assert_eq!(
            *table.resolve("/poem/featured").expect("poem").page(),
            Page::Poem
        );
        assert_eq!(*table.resolve("/guide").expect("any").page(), Page::Any);
    }

    #[test]
    fn resolution_is_repeatable() {
        let table = table();
        for target in ["/", "/poem/42", "/nowhere", "relative"] {
            let first = table.resolve(target).map(|m| (*m.page(), m.params().clone()));
            let second = table.resolve(target).map(|m| (*m.page(), m.params().clone()));
            assert_eq!(first.is_ok(), second.is_ok());
            if let (Ok(a), Ok(b)) = (first, second) {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn build_rejects_bad_pattern() {
        let result = RouteTable::builder()
            .route("/", Page::Home)
            .route("poem/:id", Page::Poem)
            .build();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("poem/:id"));
    }

    #[test]
    fn routes_are_listed_in_order() {
        let table = table();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        let pages: Vec<Page> = table.routes().map(|r| *r.page()).collect();
        assert_eq!(pages, vec![Page::Home, Page::Login, Page::Guide, Page::Poem]);
    }
}
