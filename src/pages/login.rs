//! Login page supporting email/password and guest sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiError;
use crate::net::types::{Credentials, Session};
use crate::state::auth::AuthState;

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Fold a login outcome into auth state. Returns true when the user should
/// leave the login page.
fn apply_login_result(state: &mut AuthState, result: Result<Session, ApiError>) -> bool {
    match result {
        Ok(session) => {
            state.finish_login(session);
            if !state.is_logged_in() {
                state.error = Some("Signed in, but the server issued no access token.".to_owned());
            }
            state.is_logged_in()
        }
        Err(e) => {
            state.fail(format!("Login failed: {e}"));
            false
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let finish = move |result: Result<Session, ApiError>| {
        let mut leave = false;
        auth.update(|state| leave = apply_login_result(state, result));
        if leave {
            navigate("/", NavigateOptions::default());
        }
    };

    let on_submit = {
        let finish = finish.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if auth.get_untracked().loading {
                return;
            }
            let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => credentials,
                Err(message) => {
                    auth.update(|state| state.fail(message));
                    return;
                }
            };
            auth.update(AuthState::begin_request);

            #[cfg(feature = "csr")]
            {
                let finish = finish.clone();
                leptos::task::spawn_local(async move {
                    finish(crate::net::api::browser_auth_client().login(&credentials).await);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                finish(Err(ApiError::Unavailable));
                let _ = credentials;
            }
        }
    };

    let on_guest = move |_: leptos::ev::MouseEvent| {
        if auth.get_untracked().loading {
            return;
        }
        auth.update(AuthState::begin_request);

        #[cfg(feature = "csr")]
        {
            let finish = finish.clone();
            leptos::task::spawn_local(async move {
                finish(crate::net::api::browser_auth_client().login_guest().await);
            });
        }
        #[cfg(not(feature = "csr"))]
        finish(Err(ApiError::Unavailable));
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Finder"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || auth.get().loading>
                        "Sign In"
                    </button>
                </form>
                <div class="login-divider"></div>
                <button class="login-button login-button--guest" on:click=on_guest disabled=move || auth.get().loading>
                    "Continue as Guest"
                </button>
                <Show when=move || auth.get().error.is_some()>
                    <p class="login-message">{move || auth.get().error.unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
