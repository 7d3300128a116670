//! Guard wrapper for routes that require a signed-in user.

use leptos::prelude::*;

use crate::session::use_session;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Renders `children` only for a signed-in user.
///
/// Shows a loading placeholder until the startup check resolves, then either
/// the children or nothing while the redirect to `/login` happens.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let session = use_session();
    install_unauth_redirect(auth, session.clone());

    view! {
        <Show
            when=move || auth.get().is_logged_in && session.is_logged_in()
            fallback=move || auth.get().loading.then(|| view! { <div class="page-loading">"Loading..."</div> })
        >
            {children()}
        </Show>
    }
}
