//! Client-side authentication session.
//!
//! ARCHITECTURE
//! ============
//! - `manager`: [`SessionManager`], the single source of truth for auth state.
//! - `token`: claim decoding and expiry validation of the compact token.
//! - `storage`: the persisted key/value seam (`localStorage` in the browser).
//! - `cross_tab`: forwards `storage` events from other tabs to the manager.
//! - `expiry`: signs the session out when its token's `exp` passes.
//! - `error`: failures returned by `login` and `register`.

pub mod cross_tab;
pub mod error;
pub mod expiry;
pub mod manager;
pub mod storage;
pub mod token;

#[cfg(test)]
pub(crate) mod testing;

pub use error::AuthError;
pub use manager::{SessionManager, SubscriptionId};
pub use storage::{BrowserStorage, MemoryStorage, TokenStorage};
pub use token::{Claims, TokenError};

/// Leptos context value carrying the page's session manager.
///
/// Context values must be `Send + Sync`; the manager is `Rc`-based and the
/// browser runs it on one thread.
pub type SessionHandle = send_wrapper::SendWrapper<SessionManager>;

/// The session manager provided by `SessionProvider`.
///
/// # Panics
///
/// Panics when called outside `SessionProvider`.
pub fn use_session() -> SessionHandle {
    leptos::prelude::expect_context::<SessionHandle>()
}
