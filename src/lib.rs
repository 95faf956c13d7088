//! # finder-client
//!
//! Leptos + WASM single-page client for the finder service.
//!
//! This crate contains the pages, the route guard, the auth REST client with
//! its persisted session, and the memoized loader for the external maps SDK.
//! Browser-only glue is gated behind the `csr` feature; everything else builds
//! and tests natively.

pub mod app;
pub mod config;
pub mod globals;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
