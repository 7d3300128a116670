//! Expiry watcher.
//!
//! Sleeps until the current token's `exp`, then asks the manager to
//! [`refresh`](SessionManager::refresh), so views subscribed to the manager
//! see the sign-out without any user action. Every state change re-arms the
//! watcher; a sleep that finishes after a newer arm is ignored.

use super::manager::SessionManager;
use crate::net::api::AuthTransport;

/// Longest single sleep; browsers clamp `setTimeout` delays to `i32::MAX` ms.
pub const MAX_SLEEP_MS: u64 = 2_147_483_647;

/// Milliseconds to sleep for `secs` seconds of remaining validity.
///
/// Never negative; capped at [`MAX_SLEEP_MS`], after which the watcher wakes
/// and sleeps again.
pub fn sleep_millis(secs: i64) -> u64 {
    u64::try_from(secs).unwrap_or(0).saturating_mul(1000).min(MAX_SLEEP_MS)
}

/// Watch `manager` for the life of the page.
#[cfg(feature = "csr")]
pub fn watch<T: AuthTransport + 'static>(manager: &SessionManager<T>) {
    use std::cell::Cell;
    use std::rc::Rc;

    let generation = Rc::new(Cell::new(0_u64));
    arm(manager, &generation);
    let watched = manager.clone();
    manager.subscribe(move |_| arm(&watched, &generation));
}

/// Native builds have no timers; `check_access` still catches expiry.
#[cfg(not(feature = "csr"))]
pub fn watch<T: AuthTransport + 'static>(manager: &SessionManager<T>) {
    let _ = manager;
}

#[cfg(feature = "csr")]
fn arm<T: AuthTransport + 'static>(manager: &SessionManager<T>, generation: &std::rc::Rc<std::cell::Cell<u64>>) {
    let ticket = generation.get().wrapping_add(1);
    generation.set(ticket);
    let Some(secs) = manager.seconds_until_expiry() else {
        return;
    };

    let manager = manager.clone();
    let generation = std::rc::Rc::clone(generation);
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(sleep_millis(secs))).await;
        if generation.get() != ticket {
            return;
        }
        manager.refresh();
        // Still signed in after a capped sleep: keep waiting.
        if generation.get() == ticket {
            arm(&manager, &generation);
        }
    });
}
