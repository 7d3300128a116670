//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Views only ever see this snapshot; the
//! token itself stays inside [`crate::session::SessionManager`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Read-only view of the session published to every subscriber.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// Identity of the signed-in user.
    pub user: Option<String>,
    pub is_logged_in: bool,
    /// True until the startup token check has run.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, is_logged_in: false, loading: true }
    }
}

impl AuthState {
    /// A resolved, signed-out state.
    #[must_use]
    pub fn logged_out() -> Self {
        Self { user: None, is_logged_in: false, loading: false }
    }
}
