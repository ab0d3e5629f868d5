//! Guide page component.

use leptos::prelude::*;

/// How to use the site. Public.
#[component]
pub fn GuidePage() -> impl IntoView {
    view! {
        <div class="guide-page">
            <h1>"Guide"</h1>
            <p>"Each day brings one poem chosen for you."</p>
            <p>"Open a poem to read it in full and leave a review."</p>
            <p>"The more you review, the better the daily choice fits your taste."</p>
            <a href="/login" class="cta-button">"Sign in to begin"</a>
        </div>
    }
}
