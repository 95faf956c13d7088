//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic.
//! `map_host` is the only module that needs a real `window`, so it is gated
//! behind the `csr` feature.

pub mod auth;
#[cfg(feature = "csr")]
pub mod map_host;
pub mod map_loader;
