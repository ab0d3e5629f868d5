//! Fallback page for paths without a route.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found."</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <a href="/">"Return to today's poem"</a>
        </div>
    }
}
