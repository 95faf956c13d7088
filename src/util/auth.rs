//! Route guard shared by every navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any path outside [`PUBLIC_PATHS`] requires a stored session. The check reads
//! storage on each navigation instead of the reactive auth state, so a session
//! written or removed outside the UI is still honored.
//!
//! The router evaluates [`route_condition`] before a protected route's view is
//! built, so a page without a session never mounts. Unmatched paths go through
//! [`guard_navigation`] in the not-found fallback.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionStore;

pub const LOGIN_PATH: &str = "/login";

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// Decide whether navigating to `path` may proceed.
pub fn guard_navigation<S: SessionStore + ?Sized>(path: &str, store: &S) -> Navigation {
    let auth_required = !PUBLIC_PATHS.contains(&path);
    if auth_required && !store.has_session() {
        Navigation::Redirect(LOGIN_PATH)
    } else {
        Navigation::Proceed
    }
}

/// Condition for a `ProtectedRoute` at `path`: `Some(true)` lets the view
/// mount, `Some(false)` makes the router redirect instead.
pub fn route_condition<S>(path: &'static str, store: S) -> impl Fn() -> Option<bool> + Clone + 'static
where
    S: SessionStore + Clone + 'static,
{
    move || Some(guard_navigation(path, &store) == Navigation::Proceed)
}
