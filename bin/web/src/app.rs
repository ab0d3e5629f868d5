//! Main Leptos application component.

use crate::config::AppConfig;
use crate::outlet::GuardedOutlet;
use crate::routes::app_routes;
use crate::session::{AppMarker, app_marker, use_session};
use daily_verse_routing::{NavigationGuard, Navigator};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::use_navigate;

/// The main application component.
///
/// Builds the route table and the navigation guard once, provides the
/// session marker to every page, and renders the guarded outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let marker = app_marker(&config.session);
    provide_context(marker.clone());
    let login_path = config.guard.login_path.clone();

    let navigator = match app_routes() {
        Ok(table) => Some(Navigator::new(
            table,
            NavigationGuard::new(config.guard, marker),
        )),
        Err(e) => {
            tracing::error!(error = %e, "route table is invalid");
            None
        }
    };

    view! {
        <Title text="Poem of the Day"/>
        <Router>
            <Header login_path=login_path/>
            <main class="container">
                {match navigator {
                    Some(navigator) => view! { <GuardedOutlet navigator=navigator/> }.into_any(),
                    None => view! {
                        <p class="error">"The application failed to start."</p>
                    }.into_any(),
                }}
            </main>
        </Router>
    }
}

/// Header with navigation links and sign-out.
///
/// Signing out returns to `login_path`, the guard's configured login page.
#[component]
fn Header(login_path: String) -> impl IntoView {
    let marker = use_session();
    let navigate = use_navigate();

    let sign_out = move |_| {
        navigate(end_session(&marker, &login_path), NavigateOptions::default());
    };

    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"Poem of the Day"</a>
            </div>
            <nav class="header-right">
                <a href="/analysis">"Analysis"</a>
                <a href="/guide">"Guide"</a>
                <button class="sign-out" on:click=sign_out>"Sign out"</button>
            </nav>
        </header>
    }
}

/// Clears the session marker and returns the page to leave for.
fn end_session<'a>(marker: &AppMarker, login_path: &'a str) -> &'a str {
    if let Err(e) = marker.sign_out() {
        tracing::warn!(error = %e, "failed to clear session marker");
    }
    login_path
}
