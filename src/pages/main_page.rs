//! Main finder page hosting the map container.
//!
//! The page kicks off the maps SDK load on mount and renders its progress as a
//! status badge; every mount after the first reuses the same load.

use leptos::prelude::*;

use crate::globals::Status;
use crate::state::auth::AuthState;

#[component]
pub fn MainPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let status = RwSignal::new(Status::Idle);
    let detail = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let signal = crate::util::map_host::ensure_maps_loaded();
        status.set(crate::util::map_host::maps_phase().into());
        leptos::task::spawn_local(async move {
            match signal.await {
                Ok(_) => status.set(Status::Done),
                Err(e) => {
                    status.set(Status::Error);
                    detail.set(e.to_string());
                }
            }
        });
    }

    view! {
        <div class="main-page">
            <header class="main-page__header">
                <h1>"Finder"</h1>
                <a href="/profile" class="main-page__user">
                    {move || auth.get().session.map(|s| s.display_name()).unwrap_or_default()}
                </a>
            </header>
            <p class=move || format!("map-status map-status--{}", status.get().color())>
                <i class=move || format!("mdi {}", status.get().icon())></i>
                {move || format!("Map {}", status.get().label())}
            </p>
            <Show when=move || !detail.get().is_empty()>
                <p class="map-status__detail">{move || detail.get()}</p>
            </Show>
            <div id="map" class="map-container"></div>
        </div>
    }
}
