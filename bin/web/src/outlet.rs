//! Guarded page outlet.
//!
//! Every location change, including the first render, is passed through the
//! [`Navigator`]: the navigation guard decides, the effective path is
//! resolved against the route table, and the matching page is rendered. When
//! the guard redirects, the address bar is replaced with the redirect target
//! so the abandoned destination does not stay in history.

use crate::pages::{
    AnalysisPage, GuidePage, HomePage, LoginPage, NotFoundPage, PoemDetailPage, RegisterPage,
};
use crate::routes::Page;
use crate::session::AppMarker;
use daily_verse_core::{PoemId, Result};
use daily_verse_routing::{Navigation, Navigator, RoutingError};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

/// The navigator shared by the outlet for the lifetime of the app.
pub type AppNavigator = Navigator<Page, AppMarker>;

/// What the outlet renders for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A page was resolved. `redirect` holds the target the address bar
    /// must be moved to when the guard redirected.
    Rendered {
        page: Page,
        poem_id: Option<PoemId>,
        redirect: Option<String>,
    },
    /// No route matches `path`.
    NotFound { path: String },
}

impl Outcome {
    /// Converts a navigation attempt into something renderable.
    pub fn from_navigation(
        requested: &str,
        result: Result<Navigation<Page>, RoutingError>,
    ) -> Self {
        match result {
            Ok(navigation) => {
                let poem_id = navigation
                    .params()
                    .get("id")
                    .and_then(|id| id.parse::<PoemId>().ok());
                let redirect = navigation
                    .was_redirected()
                    .then(|| navigation.to().to_string());
                Self::Rendered {
                    page: *navigation.page(),
                    poem_id,
                    redirect,
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, path = requested, "rendering not-found page");
                Self::NotFound {
                    path: requested.to_string(),
                }
            }
        }
    }

    /// Returns the redirect target, if the guard redirected.
    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Self::Rendered { redirect, .. } => redirect.as_deref(),
            Self::NotFound { .. } => None,
        }
    }
}

/// Renders the page for the current location behind the navigation guard.
#[component]
pub fn GuardedOutlet(navigator: AppNavigator) -> impl IntoView {
    let navigator = StoredValue::new(navigator);
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        let path = location.pathname.get();
        navigator
            .try_update_value(|nav| Outcome::from_navigation(&path, nav.navigate(&path)))
            .unwrap_or(Outcome::NotFound { path })
    });

    Effect::new(move |_| {
        if let Some(target) = outcome.get().redirect() {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match outcome.get() {
        Outcome::Rendered { page, poem_id, .. } => view! {
            <Title text=page.title()/>
            {render_page(page, poem_id)}
        }
        .into_any(),
        Outcome::NotFound { path } => view! {
            <Title text="Not found"/>
            <NotFoundPage path=path/>
        }
        .into_any(),
    }
}

fn render_page(page: Page, poem_id: Option<PoemId>) -> AnyView {
    match (page, poem_id) {
        (Page::Home, _) => view! { <HomePage/> }.into_any(),
        (Page::Login, _) => view! { <LoginPage/> }.into_any(),
        (Page::Register, _) => view! { <RegisterPage/> }.into_any(),
        (Page::Guide, _) => view! { <GuidePage/> }.into_any(),
        (Page::Analysis, _) => view! { <AnalysisPage/> }.into_any(),
        (Page::PoemDetail, Some(id)) => view! { <PoemDetailPage id=id/> }.into_any(),
        (Page::PoemDetail, None) => view! { <NotFoundPage path="/poem".to_string()/> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::app_routes;
    use daily_verse_routing::{GuardConfig, NavigationGuard};
    use daily_verse_session::{MemoryStore, SessionMarker};

    fn navigator(signed_in: bool) -> Navigator<Page, SessionMarker<MemoryStore>> {
        let marker = SessionMarker::new(MemoryStore::new());
        if signed_in {
            marker.sign_in("li_bai").expect("sign in");
        }
        Navigator::new(
            app_routes().expect("valid routes"),
            NavigationGuard::new(GuardConfig::default(), marker),
        )
    }

    #[test]
    fn signed_out_home_renders_login_with_redirect() {
        let mut nav = navigator(false);
        let outcome = Outcome::from_navigation("/", nav.navigate("/"));
        assert_eq!(
            outcome,
            Outcome::Rendered {
                page: Page::Login,
                poem_id: None,
                redirect: Some("/login".to_string()),
            }
        );
    }

    #[test]
    fn signed_in_poem_renders_detail() {
        let mut nav = navigator(true);
        let outcome = Outcome::from_navigation("/poem/42", nav.navigate("/poem/42"));
        assert_eq!(
            outcome,
            Outcome::Rendered {
                page: Page::PoemDetail,
                poem_id: Some("42".parse().expect("valid id")),
                redirect: None,
            }
        );
        assert_eq!(outcome.redirect(), None);
    }

    #[test]
    fn unknown_path_renders_not_found() {
        let mut nav = navigator(true);
        let outcome = Outcome::from_navigation("/missing", nav.navigate("/missing"));
        assert_eq!(
            outcome,
            Outcome::NotFound {
                path: "/missing".to_string()
            }
        );
    }

    #[test]
    fn public_page_renders_without_session() {
        let mut nav = navigator(false);
        let outcome = Outcome::from_navigation("/guide", nav.navigate("/guide"));
        assert_eq!(outcome.redirect(), None);
    }
}
