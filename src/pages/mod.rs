//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and reads auth state only
//! through the session context.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
