//! Access-token header derived from the stored session.

#[cfg(test)]
#[path = "auth_header_test.rs"]
mod auth_header_test;

use std::collections::BTreeMap;

use crate::state::session::SessionStore;

pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Headers that authenticate a request as the stored user.
///
/// Empty when there is no session or the session has no token.
pub fn auth_header<S: SessionStore + ?Sized>(store: &S) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    if let Some(token) = store.load().as_ref().and_then(|s| s.token()) {
        headers.insert(ACCESS_TOKEN_HEADER.to_owned(), token.to_owned());
    }
    headers
}
