//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` carries requests to the server and `types` defines the wire schema.

pub mod api;
pub mod types;
