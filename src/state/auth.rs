//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal` context by the root component so pages can render
//! identity-dependent UI. The route guard does not read this; it checks
//! storage directly on every navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;
use crate::state::session::SessionStore;

/// Authentication state tracking the current session and request status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True while a login request is in flight.
    pub loading: bool,
    /// Last login failure message, cleared on the next attempt.
    pub error: Option<String>,
}

impl AuthState {
    /// Seed state from whatever session is already persisted.
    pub fn from_store<S: SessionStore + ?Sized>(store: &S) -> Self {
        Self { session: store.load(), ..Self::default() }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.token().is_some())
    }

    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a completed login. A token-less profile still becomes the
    /// displayed session even though nothing was persisted.
    pub fn finish_login(&mut self, session: Session) {
        self.loading = false;
        self.session = Some(session);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
