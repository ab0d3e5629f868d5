//! Registration page component.

use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="register-page">
            <div class="login-box">
                <h1>"Register"</h1>
                <p>"Accounts are created by the poetry service."</p>
                <a href="/login" class="login-button">"Back to sign in"</a>
            </div>
        </div>
    }
}
