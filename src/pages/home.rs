//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::navigation;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"StockSimulator"</h1>
            <p>"Practice trading with a simulated portfolio."</p>
            <Show
                when=move || auth.get().is_logged_in
                fallback=|| view! { <a href=navigation::REGISTER class="btn btn--primary">"Get started"</a> }
            >
                <a href=navigation::DASHBOARD class="btn btn--primary">"Go to dashboard"</a>
            </Show>
        </div>
    }
}
