//! Login page: username-or-email + password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;
use crate::util::navigation;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let username_or_email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user_value = username_or_email.get().trim().to_owned();
        let password_value = password.get();
        if user_value.is_empty() || password_value.is_empty() {
            error.set(Some("Enter your username or email and password.".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(&user_value, &password_value).await {
                Ok(()) => navigate(navigation::DASHBOARD, NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Login"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Username or email"
                    required
                    prop:value=move || username_or_email.get()
                    on:input=move |ev| username_or_email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
                <p class="auth-card__switch">
                    "No account? " <a href=navigation::REGISTER>"Sign up"</a>
                </p>
            </form>
        </div>
    }
}
