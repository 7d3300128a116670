//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared session state from Leptos context providers; only
//! `session_provider` creates it.

pub mod navbar;
pub mod protected;
pub mod session_provider;
