//! Root provider that owns the page's session manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! Must sit inside `<Router>` (it needs `use_navigate`) and above `<Routes>`.
//! The startup token check runs here, synchronously, before any child
//! renders, so guarded routes never see a half-initialized session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::session::{SessionHandle, SessionManager, cross_tab, expiry};
use crate::state::auth::AuthState;

/// Provides `SessionHandle` and `ReadSignal<AuthState>` to descendants.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let navigate = use_navigate();
    let manager = SessionManager::browser(ClientConfig::from_env(), move |path: &str| {
        navigate(path, NavigateOptions::default());
    });

    let auth = RwSignal::new(AuthState::default());
    manager.subscribe(move |state| auth.set(state.clone()));
    manager.initialize();
    cross_tab::listen(&manager);
    expiry::watch(&manager);

    provide_context(auth.read_only());
    provide_context::<SessionHandle>(SessionHandle::new(manager));

    children()
}
