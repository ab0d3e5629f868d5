//! Analysis page component.

use leptos::prelude::*;

/// Reading statistics for the signed-in user.
#[component]
pub fn AnalysisPage() -> impl IntoView {
    view! {
        <div class="analysis-page">
            <h1>"Analysis"</h1>
            <p>"Your reading history and favourite themes appear here."</p>
        </div>
    }
}
