use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, "/api");
    assert_eq!(cfg.maps.callback_name, "gmapsCallback");
    assert_eq!(cfg.maps.global_name, "google");
    assert_eq!(cfg.maps.load_timeout, Some(Duration::from_millis(30_000)));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("FINDER_API_BASE_URL", "https://finder.example.test/api/"),
        ("FINDER_MAPS_API_KEY", "k-123"),
        ("FINDER_MAPS_CALLBACK", "onMapsReady"),
        ("FINDER_MAPS_GLOBAL", "maps"),
        ("FINDER_MAPS_SCRIPT_URL", "https://cdn.test/sdk.js?k={key}&cb={callback}"),
        ("FINDER_MAPS_LOAD_TIMEOUT_MS", "1500"),
    ]))
    .unwrap();

    assert_eq!(cfg.api_base_url, "https://finder.example.test/api");
    assert_eq!(cfg.maps.api_key, "k-123");
    assert_eq!(cfg.maps.callback_name, "onMapsReady");
    assert_eq!(cfg.maps.global_name, "maps");
    assert_eq!(cfg.maps.load_timeout, Some(Duration::from_millis(1500)));
    assert_eq!(cfg.maps.script_url(), "https://cdn.test/sdk.js?k=k-123&cb=onMapsReady");
}

#[test]
fn zero_timeout_disables_timeout() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("FINDER_MAPS_LOAD_TIMEOUT_MS", "0")])).unwrap();
    assert_eq!(cfg.maps.load_timeout, None);
}

#[test]
fn invalid_timeout_is_rejected() {
    let err = ClientConfig::from_lookup(lookup_from(&[("FINDER_MAPS_LOAD_TIMEOUT_MS", "soon")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue { var: MAPS_LOAD_TIMEOUT_VAR, value: "soon".to_owned() }
    );
}

#[test]
fn blank_callback_name_is_rejected() {
    let err = ClientConfig::from_lookup(lookup_from(&[("FINDER_MAPS_CALLBACK", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { var: MAPS_CALLBACK_VAR, .. }));
}

#[test]
fn default_script_url_embeds_key_and_callback() {
    let maps = MapsConfig { api_key: "abc".to_owned(), ..MapsConfig::default() };
    assert_eq!(
        maps.script_url(),
        "https://maps.googleapis.com/maps/api/js?key=abc&callback=gmapsCallback&sensor=false&libraries=places"
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn script_url_percent_encodes_unsafe_characters() {
    let maps = MapsConfig { api_key: "a b&c".to_owned(), ..MapsConfig::default() };
    assert!(maps.script_url().contains("key=a%20b%26c&"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn query_encoding_matches_encode_uri_component() {
    assert_eq!(encode_query_value("AIza-_.!~*'()"), "AIza-_.!~*'()");
    assert_eq!(encode_query_value("a/b?c=d#e"), "a%2Fb%3Fc%3Dd%23e");
    assert_eq!(encode_query_value("café"), "caf%C3%A9");
}
