//! Home page component.

use crate::session::use_session;
use leptos::prelude::*;

/// Poem of the day.
#[component]
pub fn HomePage() -> impl IntoView {
    let marker = use_session();
    let greeting = match marker.value() {
        Ok(Some(record)) => display_name(&record)
            .map(|name| format!("Welcome back, {name}."))
            .unwrap_or_else(|| "Welcome back.".to_string()),
        Ok(None) => "Welcome.".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read session marker");
            "Welcome.".to_string()
        }
    };

    view! {
        <div class="home-page">
            <h1>{greeting}</h1>
            <p>"Today's poem is on its way."</p>
            <a href="/guide">"How this works"</a>
        </div>
    }
}

/// Pulls a display name out of the stored user record, if it has one.
fn display_name(record: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(record).ok()?;
    value
        .get("username")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}
