//! Profile page listing the stored user fields, with logout.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde_json::Value;

use crate::net::api::browser_auth_client;
use crate::net::types::Session;
use crate::state::auth::AuthState;
use crate::util::auth::LOGIN_PATH;

const HIDDEN_FIELDS: &[&str] = &["password"];

/// Displayable `(field, value)` rows, sorted by field name. The token is
/// never included.
fn profile_rows(session: Option<&Session>) -> Vec<(String, String)> {
    let Some(session) = session else {
        return Vec::new();
    };
    let mut rows: Vec<(String, String)> = session
        .profile
        .iter()
        .filter(|(key, _)| !HIDDEN_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| {
            let shown = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.clone(), shown)
        })
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        browser_auth_client().logout();
        auth.update(AuthState::clear);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="profile-page">
            <h1>{move || auth.get().session.map_or_else(|| "Profile".to_owned(), |s| s.display_name())}</h1>
            <dl class="profile-fields">
                {move || {
                    profile_rows(auth.get().session.as_ref())
                        .into_iter()
                        .map(|(key, value)| view! {
                            <dt>{key}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()
                }}
            </dl>
            <a href="/" class="profile-page__back">"Back to map"</a>
            <button class="logout-button" on:click=on_logout>"Log out"</button>
        </div>
    }
}
