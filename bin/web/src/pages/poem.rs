//! Poem detail page component.

use daily_verse_core::PoemId;
use leptos::prelude::*;

/// A single poem, selected by the `/poem/:id` route.
#[component]
pub fn PoemDetailPage(id: PoemId) -> impl IntoView {
    view! {
        <div class="poem-page">
            <h1>"Poem " {id.to_string()}</h1>
            <a href="/">"Back to today's poem"</a>
        </div>
    }
}
