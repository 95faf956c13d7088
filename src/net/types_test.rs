use super::*;
use serde_json::json;

#[test]
fn session_keeps_unknown_profile_fields() {
    let session: Session = serde_json::from_value(json!({
        "name": "Alice",
        "role": "admin",
        "token": "T1"
    }))
    .unwrap();
    assert_eq!(session.token(), Some("T1"));
    assert_eq!(session.field("role"), Some("admin"));
    assert!(!session.profile.contains_key("token"));
}

#[test]
fn session_without_token_serializes_without_token_field() {
    let mut session = Session::default();
    session.profile.insert("name".to_owned(), json!("Carol"));
    assert_eq!(serde_json::to_value(&session).unwrap(), json!({ "name": "Carol" }));
}

#[test]
fn empty_token_is_treated_as_missing() {
    let session = Session { token: Some(String::new()), ..Session::default() };
    assert_eq!(session.token(), None);
}

#[test]
fn display_name_prefers_name_then_full_name_then_email() {
    let named: Session = serde_json::from_value(json!({ "name": "Bob" })).unwrap();
    assert_eq!(named.display_name(), "Bob");

    let full: Session = serde_json::from_value(json!({ "firstName": "Ada", "lastName": "Lovelace" })).unwrap();
    assert_eq!(full.display_name(), "Ada Lovelace");

    let email: Session = serde_json::from_value(json!({ "email": "x@y.z" })).unwrap();
    assert_eq!(email.display_name(), "x@y.z");

    assert_eq!(Session::default().display_name(), "Guest");
}

#[test]
fn registration_serializes_camel_case_subset() {
    let reg = Registration {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        role: "user".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&reg).unwrap(),
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "pw",
            "role": "user"
        })
    );
}
