//! Client configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so values are baked in
//! with `option_env!` when the crate is compiled. `from_lookup` keeps parsing
//! independent of where the values come from.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const API_BASE_URL_VAR: &str = "FINDER_API_BASE_URL";
pub const MAPS_API_KEY_VAR: &str = "FINDER_MAPS_API_KEY";
pub const MAPS_CALLBACK_VAR: &str = "FINDER_MAPS_CALLBACK";
pub const MAPS_GLOBAL_VAR: &str = "FINDER_MAPS_GLOBAL";
pub const MAPS_SCRIPT_URL_VAR: &str = "FINDER_MAPS_SCRIPT_URL";
pub const MAPS_LOAD_TIMEOUT_VAR: &str = "FINDER_MAPS_LOAD_TIMEOUT_MS";

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_MAPS_CALLBACK: &str = "gmapsCallback";
pub const DEFAULT_MAPS_GLOBAL: &str = "google";
pub const DEFAULT_MAPS_SCRIPT_URL: &str =
    "https://maps.googleapis.com/maps/api/js?key={key}&callback={callback}&sensor=false&libraries=places";
pub const DEFAULT_MAPS_LOAD_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Settings for the external mapping script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsConfig {
    pub api_key: String,
    /// Name of the global function the SDK invokes once it is ready.
    pub callback_name: String,
    /// Name of the global object the SDK installs on `window`.
    pub global_name: String,
    /// URL template with `{key}` and `{callback}` placeholders.
    pub script_url_template: String,
    /// `None` leaves a stalled load pending forever.
    pub load_timeout: Option<Duration>,
}

impl MapsConfig {
    /// Render the script URL with the key and callback name substituted.
    pub fn script_url(&self) -> String {
        self.script_url_template
            .replace("{key}", &encode_query_value(&self.api_key))
            .replace("{callback}", &encode_query_value(&self.callback_name))
    }
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            callback_name: DEFAULT_MAPS_CALLBACK.to_owned(),
            global_name: DEFAULT_MAPS_GLOBAL.to_owned(),
            script_url_template: DEFAULT_MAPS_SCRIPT_URL.to_owned(),
            load_timeout: Some(Duration::from_millis(DEFAULT_MAPS_LOAD_TIMEOUT_MS)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub api_base_url: String,
    pub maps: MapsConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), maps: MapsConfig::default() }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a captured value fails to parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            match var {
                API_BASE_URL_VAR => option_env!("FINDER_API_BASE_URL"),
                MAPS_API_KEY_VAR => option_env!("FINDER_MAPS_API_KEY"),
                MAPS_CALLBACK_VAR => option_env!("FINDER_MAPS_CALLBACK"),
                MAPS_GLOBAL_VAR => option_env!("FINDER_MAPS_GLOBAL"),
                MAPS_SCRIPT_URL_VAR => option_env!("FINDER_MAPS_SCRIPT_URL"),
                MAPS_LOAD_TIMEOUT_VAR => option_env!("FINDER_MAPS_LOAD_TIMEOUT_MS"),
                _ => None,
            }
            .map(str::to_owned)
        })
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// Optional (all have defaults):
    /// - `FINDER_API_BASE_URL`: default `/api`
    /// - `FINDER_MAPS_API_KEY`: default empty
    /// - `FINDER_MAPS_CALLBACK`: default `gmapsCallback`
    /// - `FINDER_MAPS_GLOBAL`: default `google`
    /// - `FINDER_MAPS_SCRIPT_URL`: Google Maps JS URL template
    /// - `FINDER_MAPS_LOAD_TIMEOUT_MS`: default 30000, `0` disables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unparseable timeout or an
    /// empty callback/global name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let callback_name = non_empty(MAPS_CALLBACK_VAR, lookup(MAPS_CALLBACK_VAR), DEFAULT_MAPS_CALLBACK)?;
        let global_name = non_empty(MAPS_GLOBAL_VAR, lookup(MAPS_GLOBAL_VAR), DEFAULT_MAPS_GLOBAL)?;
        let load_timeout = parse_timeout(lookup(MAPS_LOAD_TIMEOUT_VAR).as_deref())?;

        let maps = MapsConfig {
            api_key: lookup(MAPS_API_KEY_VAR).unwrap_or_default(),
            callback_name,
            global_name,
            script_url_template: lookup(MAPS_SCRIPT_URL_VAR).unwrap_or_else(|| DEFAULT_MAPS_SCRIPT_URL.to_owned()),
            load_timeout,
        };

        Ok(Self { api_base_url, maps })
    }
}

fn non_empty(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    match raw {
        None => Ok(default.to_owned()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue { var, value }),
        Some(value) => Ok(value.trim().to_owned()),
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Some(Duration::from_millis(DEFAULT_MAPS_LOAD_TIMEOUT_MS)));
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(ms) => Ok(Some(Duration::from_millis(ms))),
        Err(_) => Err(ConfigError::InvalidValue { var: MAPS_LOAD_TIMEOUT_VAR, value: raw.to_owned() }),
    }
}

/// Percent-encode a query value the way `encodeURIComponent` does.
#[cfg(feature = "csr")]
fn encode_query_value(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

/// Native stand-in for `encodeURIComponent`, used by tests and non-browser builds.
#[cfg(not(feature = "csr"))]
fn encode_query_value(raw: &str) -> String {
    const UNESCAPED: &[u8] = b"-_.!~*'()";
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || UNESCAPED.contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
