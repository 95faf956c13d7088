use super::*;
use crate::state::session::MemorySessionStore;
use serde_json::json;

fn session(value: serde_json::Value) -> Session {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn from_store_loads_persisted_session() {
    let store = MemorySessionStore::with_session(&session(json!({ "name": "Alice", "token": "T1" })));
    let state = AuthState::from_store(&store);
    assert!(state.is_logged_in());
    assert_eq!(state.session.unwrap().field("name"), Some("Alice"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_request_sets_loading_and_clears_error() {
    let mut state = AuthState { error: Some("old".to_owned()), ..AuthState::default() };
    state.begin_request();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn tokenless_login_is_not_logged_in() {
    let mut state = AuthState::default();
    state.begin_request();
    state.finish_login(session(json!({ "name": "Carol" })));
    assert!(!state.loading);
    assert!(state.session.is_some());
    assert!(!state.is_logged_in());
}

#[test]
fn fail_records_message() {
    let mut state = AuthState::default();
    state.begin_request();
    state.fail("login failed: 401");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("login failed: 401"));
}

#[test]
fn clear_resets_everything() {
    let mut state = AuthState::default();
    state.finish_login(session(json!({ "name": "Bob", "token": "T2" })));
    state.clear();
    assert_eq!(state, AuthState::default());
}
