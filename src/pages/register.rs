//! Account registration page. On success the session manager sends the
//! user on to `/login`.

use leptos::prelude::*;

use crate::net::types::RegisterRequest;
use crate::session::use_session;
use crate::util::navigation;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = RegisterRequest {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
            error.set(Some("All fields are required.".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = session.register(&request).await {
                error.set(Some(e.to_string()));
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Create account"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Username"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password (6+ characters)"
                    minlength="6"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
                <p class="auth-card__switch">
                    "Already registered? " <a href=navigation::LOGIN>"Login"</a>
                </p>
            </form>
        </div>
    }
}
