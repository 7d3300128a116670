//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::session::SessionHandle;
use crate::state::auth::AuthState;

/// Whether a protected view should leave for `/login`.
///
/// Never true while the startup check is still pending.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_logged_in
}

/// Redirect to `/login` whenever auth has loaded and no user is signed in.
///
/// A snapshot that still reads signed in is refreshed against the clock on
/// mount and on every change; a lapse republishes and the effect re-runs.
pub fn install_unauth_redirect(auth: ReadSignal<AuthState>, session: SessionHandle) {
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            session.check_access(true);
        } else if !state.loading {
            session.refresh();
        }
    });
}
