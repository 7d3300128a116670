//! Cross-tab session sync.
//!
//! The browser fires `storage` on every *other* document of the origin when
//! `localStorage` changes. Each event re-runs the manager's token check, so
//! a logout in one tab signs out the rest without a reload.

use super::manager::SessionManager;
use crate::net::api::AuthTransport;

/// Forward `window` `storage` events to `manager` for the life of the page.
#[cfg(feature = "csr")]
pub fn listen<T: AuthTransport + 'static>(manager: &SessionManager<T>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        log::warn!("no window; cross-tab session sync disabled");
        return;
    };
    let manager = manager.clone();
    let callback = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
        log::debug!("storage changed in another tab (key: {:?})", event.key());
        forward(&manager);
    });
    if window
        .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to subscribe to storage events");
        return;
    }
    // The listener lives as long as the page.
    callback.forget();
}

/// Native builds have no other tabs.
#[cfg(not(feature = "csr"))]
pub fn listen<T: AuthTransport + 'static>(manager: &SessionManager<T>) {
    let _ = manager;
}

/// Apply one storage notification.
pub fn forward<T: AuthTransport>(manager: &SessionManager<T>) {
    let state = manager.on_storage_event();
    log::debug!("session reconciled after storage event, logged_in={}", state.is_logged_in);
}
