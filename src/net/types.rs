//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! The server owns the user profile schema, so `Session` keeps every profile
//! field it does not know about in a flattened JSON map and only names the
//! bearer token.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The logged-in user as returned by `/auth` and persisted in storage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque profile fields (name, email, role, ...).
    #[serde(flatten)]
    pub profile: Map<String, Value>,
    /// Bearer token taken from the `authorization` response header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Session {
    /// Token, if present and non-empty.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// String-valued profile field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.profile.get(key).and_then(Value::as_str)
    }

    /// Best-effort display name built from the usual profile fields.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.field("name") {
            return name.to_owned();
        }
        let first = self.field("firstName").unwrap_or_default();
        let last = self.field("lastName").unwrap_or_default();
        let full = format!("{first} {last}").trim().to_owned();
        if !full.is_empty() {
            return full;
        }
        self.field("email").unwrap_or("Guest").to_owned()
    }
}

/// Login form payload posted to `/auth`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload posted to `/register`.
///
/// Exactly these five fields go over the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}
