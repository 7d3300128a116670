//! Failures surfaced by `login` and `register`.
//!
//! `Display` is the text shown inline on the form.

use super::token::TokenError;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered and refused the request.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// No reply arrived; the detail is kept for logs only.
    #[error("Network error occurred")]
    Network(String),
    #[error("Unexpected response from server")]
    MalformedResponse(String),
    #[error("Received an invalid session token")]
    InvalidToken(#[from] TokenError),
}

impl AuthError {
    /// Rejection whose message comes from the reply body, or `fallback`.
    pub(crate) fn rejected(status: u16, body: &str, fallback: &str) -> Self {
        let message = crate::net::types::error_message(body).unwrap_or_else(|| fallback.to_owned());
        Self::Rejected { status, message }
    }
}
