//! The session manager: single owner of the browser's authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One manager exists per page load. `SessionProvider` builds it, runs
//! [`SessionManager::initialize`] before any route renders, and hands clones
//! of the handle to views. Views read [`AuthState`] snapshots and mutate only
//! through `login`, `logout`, `register`, `refresh` and the `storage` event
//! hook.
//!
//! A published snapshot goes stale once the clock passes `exp`. `refresh`
//! (run by `check_access` and by the expiry watcher) drops the lapsed token
//! and publishes the signed-out state.
//!
//! DESIGN
//! ======
//! State lives in a `RefCell` behind an `Rc`. No borrow is held across an
//! `.await` or while subscribers or the navigator run, so callbacks may read
//! the manager freely. Subscribers must not subscribe or unsubscribe from
//! inside a notification.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::net::api::{self, AuthTransport, BrowserTransport};
use crate::net::types::{ApiEnvelope, AuthPayload, LoginRequest, RegisterRequest};
use crate::state::auth::AuthState;
use crate::util::navigation::{self, Navigator};
use crate::util::time::{Clock, SystemClock};

use super::error::{AuthError, LOGIN_FAILED, REGISTRATION_FAILED};
use super::storage::{BrowserStorage, TokenStorage};
use super::token::{self, Claims};

const HTTP_CREATED: u16 = 201;

/// Handle returned by [`SessionManager::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&AuthState)>;

#[derive(Clone, Debug)]
struct Session {
    token: Option<String>,
    claims: Option<Claims>,
    user: Option<String>,
    loading: bool,
}

impl Session {
    fn starting() -> Self {
        Self { token: None, claims: None, user: None, loading: true }
    }

    fn sign_in(&mut self, token: String, claims: Claims, user: Option<String>) {
        self.user = user.or_else(|| Some(claims.sub.clone()));
        self.token = Some(token);
        self.claims = Some(claims);
    }

    fn sign_out(&mut self) {
        self.token = None;
        self.claims = None;
        self.user = None;
    }

    fn is_logged_in(&self, now_secs: i64) -> bool {
        self.token.is_some() && self.claims.as_ref().is_some_and(|c| !c.is_expired(now_secs))
    }
}

struct Inner<T> {
    config: ClientConfig,
    transport: T,
    storage: Box<dyn TokenStorage>,
    navigator: Box<dyn Navigator>,
    clock: Box<dyn Clock>,
    session: RefCell<Session>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

/// Cheaply cloneable handle; every clone observes the same session.
pub struct SessionManager<T = BrowserTransport> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for SessionManager<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl SessionManager<BrowserTransport> {
    /// Manager wired to `fetch`, `localStorage` and the wall clock.
    pub fn browser(config: ClientConfig, navigator: impl Navigator + 'static) -> Self {
        Self::new(config, BrowserTransport, BrowserStorage, navigator, SystemClock)
    }
}

impl<T: AuthTransport> SessionManager<T> {
    pub fn new(
        config: ClientConfig,
        transport: T,
        storage: impl TokenStorage + 'static,
        navigator: impl Navigator + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                transport,
                storage: Box::new(storage),
                navigator: Box::new(navigator),
                clock: Box::new(clock),
                session: RefCell::new(Session::starting()),
                subscribers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
            }),
        }
    }

    /// Resolve the startup auth state from the persisted token.
    ///
    /// Runs synchronously and flips `loading` to false. Only the first call
    /// does anything; later calls return the current state.
    pub fn initialize(&self) -> AuthState {
        if !self.inner.session.borrow().loading {
            log::debug!("session already initialized");
            return self.state();
        }
        self.reload_from_storage();
        self.inner.session.borrow_mut().loading = false;
        let state = self.publish();
        log::debug!("session initialized, logged_in={}", state.is_logged_in);
        state
    }

    /// Reconcile with storage after another browsing context changed it.
    pub fn on_storage_event(&self) -> AuthState {
        self.reload_from_storage();
        self.publish()
    }

    /// Exchange credentials for a token via `POST /api/auth/login`.
    ///
    /// Does not navigate; the caller picks the next route.
    ///
    /// # Errors
    ///
    /// [`AuthError::Rejected`] with the server's message, [`AuthError::Network`]
    /// when no reply arrived, or [`AuthError::MalformedResponse`] /
    /// [`AuthError::InvalidToken`] for a success reply without a usable token.
    /// Nothing is persisted on error.
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<(), AuthError> {
        let url = self.inner.config.endpoint(api::LOGIN_PATH);
        let request = LoginRequest { username_or_email, password };
        let reply = self.inner.transport.post_json(&url, &request).await.map_err(|e| {
            log::warn!("login request failed: {e}");
            AuthError::Network(e.0)
        })?;

        if !reply.is_success() {
            log::debug!("login rejected with status {}", reply.status);
            return Err(AuthError::rejected(reply.status, &reply.body, LOGIN_FAILED));
        }

        let envelope: ApiEnvelope<AuthPayload> =
            serde_json::from_str(&reply.body).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        let payload = envelope
            .data
            .ok_or_else(|| AuthError::MalformedResponse("login reply has no data".to_owned()))?;
        let token = payload.token.trim().to_owned();
        let claims = token::validate(&token, self.now()).inspect_err(|e| {
            log::warn!("login returned an unusable token: {e}");
        })?;

        self.inner.storage.set(&self.inner.config.token_key, &token);
        self.inner.session.borrow_mut().sign_in(token, claims, payload.user);
        log::info!("signed in");
        self.publish();
        Ok(())
    }

    /// Create an account via `POST /api/auth/register`.
    ///
    /// On 201 the user is sent to the login page; no token is stored.
    ///
    /// # Errors
    ///
    /// [`AuthError::Rejected`] for any other status, [`AuthError::Network`]
    /// when no reply arrived.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        let url = self.inner.config.endpoint(api::REGISTER_PATH);
        let reply = self.inner.transport.post_json(&url, request).await.map_err(|e| {
            log::warn!("register request failed: {e}");
            AuthError::Network(e.0)
        })?;

        if reply.status != HTTP_CREATED {
            log::debug!("registration rejected with status {}", reply.status);
            return Err(AuthError::rejected(reply.status, &reply.body, REGISTRATION_FAILED));
        }

        log::info!("account created for {}", request.username);
        self.inner.navigator.navigate(navigation::LOGIN);
        Ok(())
    }

    /// Drop the token everywhere and return to the home page.
    pub fn logout(&self) {
        self.inner.storage.remove(&self.inner.config.token_key);
        self.inner.session.borrow_mut().sign_out();
        log::info!("signed out");
        self.publish();
        self.inner.navigator.navigate(navigation::HOME);
    }

    /// Route guard. False while loading; redirects to `/login` when
    /// `requires_auth` and signed out, counting a token that lapsed since the
    /// last change as signed out.
    pub fn check_access(&self, requires_auth: bool) -> bool {
        let state = self.refresh();
        if state.loading {
            return false;
        }
        if requires_auth && !state.is_logged_in {
            self.inner.navigator.navigate(navigation::LOGIN);
            return false;
        }
        true
    }

    /// Sign out a session whose token has expired on the clock.
    ///
    /// Removes the token from storage and publishes only when the session
    /// actually lapsed; otherwise returns the current state quietly.
    pub fn refresh(&self) -> AuthState {
        let lapsed = {
            let session = self.inner.session.borrow();
            session.token.is_some() && !session.is_logged_in(self.now())
        };
        if !lapsed {
            return self.state();
        }
        log::info!("session expired");
        self.inner.storage.remove(&self.inner.config.token_key);
        self.inner.session.borrow_mut().sign_out();
        self.publish()
    }

    /// Seconds left before the current token expires, while signed in.
    #[must_use]
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        let now = self.now();
        let session = self.inner.session.borrow();
        if !session.is_logged_in(now) {
            return None;
        }
        session.claims.as_ref().map(|c| c.exp - now)
    }

    /// Register `callback` to receive every state change.
    pub fn subscribe(&self, callback: impl Fn(&AuthState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        let now = self.now();
        let session = self.inner.session.borrow();
        let is_logged_in = session.is_logged_in(now);
        AuthState {
            user: if is_logged_in { session.user.clone() } else { None },
            is_logged_in,
            loading: session.loading,
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.inner.session.borrow().is_logged_in(self.now())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.session.borrow().loading
    }

    #[must_use]
    pub fn user(&self) -> Option<String> {
        self.state().user
    }

    /// Claims of the current token, while signed in.
    #[must_use]
    pub fn claims(&self) -> Option<Claims> {
        if !self.is_logged_in() {
            return None;
        }
        self.inner.session.borrow().claims.clone()
    }

    /// Raw token, while signed in.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        if !self.is_logged_in() {
            return None;
        }
        self.inner.session.borrow().token.clone()
    }

    /// `Authorization` header value for authenticated API calls.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|t| api::bearer(&t))
    }

    fn now(&self) -> i64 {
        self.inner.clock.now_secs()
    }

    /// Shared decode/validate step of `initialize` and `on_storage_event`.
    /// Invalid or expired tokens are removed from storage.
    fn reload_from_storage(&self) {
        let key = &self.inner.config.token_key;
        let Some(stored) = self.inner.storage.get(key) else {
            self.inner.session.borrow_mut().sign_out();
            return;
        };
        let raw = stored.trim().to_owned();

        match token::validate(&raw, self.now()) {
            Ok(claims) => {
                if raw != stored {
                    self.inner.storage.set(key, &raw);
                }
                let mut session = self.inner.session.borrow_mut();
                // Same token as we already hold: keep the identity the login reply gave us.
                let user = if session.token.as_deref() == Some(raw.as_str()) { session.user.clone() } else { None };
                log::debug!("restored session for {}", claims.sub);
                session.sign_in(raw, claims, user);
            }
            Err(e) => {
                log::debug!("discarding stored token: {e}");
                self.inner.storage.remove(key);
                self.inner.session.borrow_mut().sign_out();
            }
        }
    }

    fn publish(&self) -> AuthState {
        let state = self.state();
        for (_, subscriber) in self.inner.subscribers.borrow().iter() {
            subscriber(&state);
        }
        state
    }
}
