//! Auth REST client: login, guest login, logout, and registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server returns the user profile in the body and the bearer token in the
//! `authorization` response header. A successful login with a token persists
//! the merged record through the [`SessionStore`]; everything else about the
//! session is read back from storage by the route guard and header provider.
//!
//! ERROR HANDLING
//! ==============
//! Transport and status failures propagate unchanged as [`ApiError`], and a
//! session that storage refuses surfaces as [`ApiError::Storage`]. A 2xx
//! response without a token is not an error: the profile is returned and no
//! session is written, leaving the caller unauthenticated.
//!
//! The token comes only from the `authorization` header. A `token` member in
//! the body never overrides it and is dropped when it is not a string.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::logging::{log, warn};
use serde_json::{Map, Value};

use super::http::{ApiError, GlooTransport, HttpRequest, HttpTransport};
use super::types::{Credentials, Registration, Session};
use crate::config::ClientConfig;
use crate::state::session::{LocalStorageSessionStore, SessionStore};

pub const AUTHORIZATION_HEADER: &str = "authorization";

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{path}", base_url.trim_end_matches('/'))
}

/// Auth client wired to `fetch` and `localStorage` using build-time config.
pub fn browser_auth_client() -> AuthClient<GlooTransport, LocalStorageSessionStore> {
    let config = ClientConfig::from_build_env().unwrap_or_else(|err| {
        warn!("invalid build config, using defaults: {err}");
        ClientConfig::default()
    });
    AuthClient::new(GlooTransport, LocalStorageSessionStore, config.api_base_url)
}

pub struct AuthClient<T, S> {
    transport: T,
    store: S,
    base_url: String,
}

impl<T: HttpTransport, S: SessionStore> AuthClient<T, S> {
    pub fn new(transport: T, store: S, base_url: impl Into<String>) -> Self {
        Self { transport, store, base_url: base_url.into() }
    }

    /// Log in via `POST {base}/auth` with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-2xx status, a body
    /// that is not a JSON object, or a session that could not be stored.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.authenticate("auth", Some(body)).await
    }

    /// Log in as a guest via `POST {base}/auth/guest`.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::login`].
    pub async fn login_guest(&self) -> Result<Session, ApiError> {
        self.authenticate("auth/guest", None).await
    }

    /// Forget the stored session. No network call.
    pub fn logout(&self) {
        self.store.remove();
        log!("session cleared");
    }

    /// Register a new account via `POST {base}/register`.
    ///
    /// Never touches the stored session. Resolves with the response body, or
    /// `null` when the body is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-2xx status, or a
    /// non-JSON body.
    pub async fn register(&self, profile: &Registration) -> Result<Value, ApiError> {
        let body = serde_json::to_value(profile).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = HttpRequest::post(endpoint(&self.base_url, "register")).json(body);
        let resp = self.transport.post(request).await?.error_for_status()?;
        resp.json()
    }

    async fn authenticate(&self, path: &str, body: Option<Value>) -> Result<Session, ApiError> {
        let mut request = HttpRequest::post(endpoint(&self.base_url, path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = self.transport.post(request).await?.error_for_status()?;

        let mut profile: Map<String, Value> = resp.json()?;
        let body_token = match profile.remove("token") {
            Some(Value::String(token)) => Some(token),
            _ => None,
        };
        let mut session = Session { profile, token: None };
        match resp.header(AUTHORIZATION_HEADER).filter(|t| !t.is_empty()) {
            Some(token) => {
                session.token = Some(token.to_owned());
                self.store.save(&session)?;
                log!("{path}: session stored");
            }
            None => {
                session.token = body_token;
                warn!("{path}: response carried no authorization token; session not stored");
            }
        }
        Ok(session)
    }
}
