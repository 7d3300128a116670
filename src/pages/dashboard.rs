//! Dashboard page. Requires a signed-in user; portfolio and watchlist panels
//! are served by the backend and rendered elsewhere.

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::session::use_session;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let session = use_session();
    let user = move || auth.get().user.unwrap_or_default();
    // Claims live on the manager; tracking auth re-reads them on change.
    let roles = Signal::derive(move || {
        auth.track();
        session.claims().map(|c| c.roles.join(", ")).filter(|r| !r.is_empty())
    });

    view! {
        <Protected>
            <div class="dashboard-page">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__greeting">"Signed in as " {user}</p>
                {move || roles.get().map(|r| view! { <p class="dashboard-page__roles">"Roles: " {r}</p> })}
            </div>
        </Protected>
    }
}
