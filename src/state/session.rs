//! Persisted login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in `localStorage` under [`SESSION_KEY`] as JSON text.
//! The route guard, the auth header provider, and the auth client all read or
//! write it through [`SessionStore`] so tests can swap in memory storage.
//!
//! TRADE-OFFS
//! ==========
//! Reads are best-effort: a missing `window`, disabled storage, or
//! unparseable JSON all read as "no session" instead of failing. Writes are
//! not; a session that could not be persisted surfaces as [`StorageError`]
//! so a login never reports success without a stored token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use crate::net::types::Session;

/// Storage key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("failed to encode session: {0}")]
    Encode(String),
    #[error("failed to write session: {0}")]
    Write(String),
}

/// Raw key-value access to the persisted session, plus typed helpers.
pub trait SessionStore {
    fn read_raw(&self) -> Option<String>;
    fn write_raw(&self, raw: &str) -> Result<(), StorageError>;
    fn remove(&self);

    /// Whether any session text is stored. An empty string counts as absent.
    fn has_session(&self) -> bool {
        self.read_raw().is_some_and(|raw| !raw.is_empty())
    }

    fn load(&self) -> Option<Session> {
        let raw = self.read_raw()?;
        serde_json::from_str(&raw).ok()
    }

    /// Serialize and persist `session`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the session cannot be encoded or the
    /// backing storage rejects the write.
    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.write_raw(&raw)
    }
}

#[cfg(test)]
impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn read_raw(&self) -> Option<String> {
        (**self).read_raw()
    }

    fn write_raw(&self, raw: &str) -> Result<(), StorageError> {
        (**self).write_raw(raw)
    }

    fn remove(&self) {
        (**self).remove();
    }
}

/// Browser `localStorage` store. No-op outside the `csr` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageSessionStore {
    fn read_raw(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(SESSION_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn write_raw(&self, raw: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(SESSION_KEY, raw)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = raw;
            Ok(())
        }
    }

    fn remove(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}

/// In-memory store shared by the unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: RefCell::new(Some(raw.into())) }
    }

    pub fn with_session(session: &Session) -> Self {
        let store = Self::new();
        store.save(session).unwrap();
        store
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn read_raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    fn write_raw(&self, raw: &str) -> Result<(), StorageError> {
        *self.raw.borrow_mut() = Some(raw.to_owned());
        Ok(())
    }

    fn remove(&self) {
        self.raw.borrow_mut().take();
    }
}
