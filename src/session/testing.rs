//! Test doubles for the session seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;

use super::manager::SessionManager;
use super::storage::MemoryStorage;
use crate::config::ClientConfig;
use crate::net::api::{AuthTransport, HttpReply, TransportError};
use crate::util::navigation::Navigator;
use crate::util::time::Clock;

pub const NOW: i64 = 1_700_000_000;

/// Unsigned compact token carrying `payload`.
pub fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

pub fn token_for(sub: &str, exp: i64) -> String {
    token_with(&serde_json::json!({"sub": sub, "exp": exp, "roles": ["USER"]}))
}

pub fn reply(status: u16, body: &str) -> Result<HttpReply, TransportError> {
    Ok(HttpReply { status, body: body.to_owned() })
}

pub fn login_ok(token: &str, user: Option<&str>) -> Result<HttpReply, TransportError> {
    let body = serde_json::json!({
        "status": 200,
        "message": "Login successful",
        "data": {"token": token, "user": user},
    });
    reply(200, &body.to_string())
}

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpReply, TransportError>>>>,
    requests: Rc<RefCell<Vec<(String, serde_json::Value)>>>,
}

impl ScriptedTransport {
    pub fn push(&self, reply: Result<HttpReply, TransportError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests.borrow().clone()
    }
}

impl AuthTransport for ScriptedTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<HttpReply, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError(e.to_string()))?;
        self.requests.borrow_mut().push((url.to_owned(), body));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())))
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_owned());
    }
}

#[derive(Clone)]
pub struct TestClock(Rc<Cell<i64>>);

impl TestClock {
    pub fn at(now: i64) -> Self {
        Self(Rc::new(Cell::new(now)))
    }

    pub fn advance(&self, secs: i64) {
        self.0.set(self.0.get() + secs);
    }
}

impl Clock for TestClock {
    fn now_secs(&self) -> i64 {
        self.0.get()
    }
}

/// A manager plus handles on every seam it was built with.
pub struct Harness {
    pub manager: SessionManager<ScriptedTransport>,
    pub storage: MemoryStorage,
    pub transport: ScriptedTransport,
    pub navigator: RecordingNavigator,
    pub clock: TestClock,
}

pub fn harness() -> Harness {
    harness_with_storage(MemoryStorage::new())
}

/// Build a manager over `storage`; pass a clone to model another tab.
pub fn harness_with_storage(storage: MemoryStorage) -> Harness {
    let transport = ScriptedTransport::default();
    let navigator = RecordingNavigator::default();
    let clock = TestClock::at(NOW);
    let manager = SessionManager::new(
        ClientConfig::default(),
        transport.clone(),
        storage.clone(),
        navigator.clone(),
        clock.clone(),
    );
    Harness { manager, storage, transport, navigator, clock }
}
