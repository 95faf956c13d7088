//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::pages::{login::LoginPage, main_page::MainPage, profile::ProfilePage};
use crate::state::auth::AuthState;
use crate::state::session::LocalStorageSessionStore;
use crate::util::auth::{LOGIN_PATH, Navigation, guard_navigation, route_condition};

/// Root application component.
///
/// Provides the auth state context and sets up guarded client-side routing.
/// `/` and `/profile` only build their views once the session check passes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_store(&LocalStorageSessionStore));
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/finder-client.css"/>
        <Title text="Finder"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ProtectedRoute
                        path=StaticSegment("profile")
                        view=ProfilePage
                        condition=route_condition("/profile", LocalStorageSessionStore)
                        redirect_path=|| LOGIN_PATH
                    />
                    <ProtectedRoute
                        path=StaticSegment("")
                        view=MainPage
                        condition=route_condition("/", LocalStorageSessionStore)
                        redirect_path=|| LOGIN_PATH
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Unknown paths are protected too: without a session they redirect to login.
#[component]
fn NotFound() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    match guard_navigation(&path, &LocalStorageSessionStore) {
        Navigation::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
        Navigation::Proceed => "Page not found.".into_any(),
    }
}
