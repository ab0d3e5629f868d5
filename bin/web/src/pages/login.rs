//! Login page component.

use crate::routes::app_routes;
use crate::session::use_session;
use daily_verse_core::path::is_absolute;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

/// Sign-in form. Stores the session marker and leaves for the requested
/// destination, or the home page when none was carried over.
#[component]
pub fn LoginPage() -> impl IntoView {
    let marker = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    let (username, set_username) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name = username.get_untracked();
        let name = name.trim();
        if name.is_empty() {
            set_error.set(Some("Please enter your name.".to_string()));
            return;
        }

        let record = serde_json::json!({ "username": name }).to_string();
        match marker.sign_in(&record) {
            Ok(()) => {
                let target = query
                    .with_untracked(|q| q.get("redirect"))
                    .filter(|target| is_safe_redirect(target))
                    .unwrap_or_else(|| "/".to_string());
                navigate(&target, Default::default());
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to store session marker");
                set_error.set(Some("Signing in is unavailable in this browser.".to_string()));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-box">
                <h1>"Sign in"</h1>
                <form on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <button type="submit" class="login-button">"Sign in"</button>
                </form>
                {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
                <a href="/register">"Create an account"</a>
            </div>
        </div>
    }
}

/// Only in-app paths that resolve to a declared route are followed after
/// sign-in.
///
/// Browsers read `//host`, `/\host` and paths with embedded whitespace or
/// control characters as links to another origin, so those are rejected
/// before the route table is consulted.
fn is_safe_redirect(target: &str) -> bool {
    if !is_absolute(target) {
        return false;
    }
    if matches!(target.as_bytes().get(1), Some(b'/' | b'\\')) {
        return false;
    }
    if target
        .chars()
        .any(|c| c.is_control() || c.is_whitespace() || c == '\\')
    {
        return false;
    }
    app_routes().is_ok_and(|table| table.resolve(target).is_ok())
}
