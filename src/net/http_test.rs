use super::*;
use serde_json::json;

fn response(status: u16, headers: &[(&str, &str)], body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: headers
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
        body: body.to_owned(),
    }
}

#[test]
fn header_lookup_ignores_case() {
    let resp = response(200, &[("Authorization", "T2")], "");
    assert_eq!(resp.header("authorization"), Some("T2"));
    assert_eq!(resp.header("AUTHORIZATION"), Some("T2"));
    assert_eq!(resp.header("x-other"), None);
}

#[test]
fn error_for_status_passes_2xx() {
    assert!(response(204, &[], "").error_for_status().is_ok());
}

#[test]
fn error_for_status_rejects_non_2xx() {
    assert_eq!(
        response(401, &[], "").error_for_status().unwrap_err(),
        ApiError::Status { status: 401 }
    );
    assert_eq!(
        response(500, &[], "").error_for_status().unwrap_err().to_string(),
        "request failed: 500"
    );
}

#[test]
fn empty_body_parses_as_null() {
    let value: Value = response(200, &[], "  ").json().unwrap();
    assert_eq!(value, Value::Null);
}

#[test]
fn invalid_body_is_decode_error() {
    let err = response(200, &[], "<html>").json::<Value>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn request_builder_collects_headers_and_body() {
    let req = HttpRequest::post("/api/auth")
        .headers([("x-access-token", "T1")])
        .json(json!({ "email": "a@b.c" }));
    assert_eq!(req.url, "/api/auth");
    assert_eq!(req.headers, vec![("x-access-token".to_owned(), "T1".to_owned())]);
    assert_eq!(req.body, Some(json!({ "email": "a@b.c" })));
}

#[cfg(not(feature = "csr"))]
#[test]
fn gloo_transport_is_unavailable_outside_browser() {
    let err = futures::executor::block_on(GlooTransport.post(HttpRequest::post("/api/auth"))).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}

#[test]
fn storage_error_converts_to_api_error() {
    let err = ApiError::from(StorageError::Unavailable);
    assert_eq!(err, ApiError::Storage("session storage is not available".to_owned()));
}
