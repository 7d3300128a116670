//! REST transport for the auth endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: a stub transport that always reports a transport failure,
//! since the endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The transport only reports whether a reply arrived. Interpreting status
//! codes and bodies is the session manager's job, so every failure surfaces
//! as a typed result instead of a panic or an unhandled rejection.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Raw HTTP reply: status code plus the body text (possibly empty).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced an HTTP reply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// Sends JSON requests to the backend.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// POST `body` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no reply was received.
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<HttpReply, TransportError>;
}

/// `Authorization` header value for a raw token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Browser `fetch` transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl AuthTransport for BrowserTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<HttpReply, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            // A reply with an unreadable body is still a reply.
            let body = resp.text().await.unwrap_or_default();
            Ok(HttpReply { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(TransportError("not available outside the browser".to_owned()))
        }
    }
}
