//! # stocksim-client
//!
//! Leptos + WASM browser client for the StockSimulator trading backend.
//!
//! Market data, portfolio valuation and trade execution all live behind the
//! REST API. The state this crate owns is the browser session: the signed
//! token kept in `localStorage`, the claims decoded from it, and the route
//! guards that depend on them. See [`session::SessionManager`].
//!
//! Browser glue is gated behind the `csr` feature; everything else compiles
//! and is tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("stocksim client starting against {}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
