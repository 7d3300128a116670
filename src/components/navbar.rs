//! Top navigation bar with session-aware links.

use leptos::prelude::*;

use crate::session::use_session;
use crate::state::auth::AuthState;
use crate::util::navigation;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let session = use_session();

    let on_logout = move |_: leptos::ev::MouseEvent| session.logout();

    view! {
        <header class="navbar">
            <span class="navbar__brand">"StockSimulator"</span>
            <nav class="navbar__links">
                <a href=navigation::HOME>"Home"</a>
                <Show
                    when=move || auth.get().is_logged_in
                    fallback=|| {
                        view! {
                            <a href=navigation::LOGIN>"Login"</a>
                            <a href=navigation::REGISTER class="navbar__signup">"Sign Up"</a>
                        }
                    }
                >
                    <a href=navigation::DASHBOARD>"Dashboard"</a>
                    <span class="navbar__user">{move || auth.get().user.unwrap_or_default()}</span>
                    <button class="btn navbar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
