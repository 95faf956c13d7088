//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns persistence of the login record; `auth` is the reactive view
//! of it that pages render from.

pub mod auth;
pub mod session;
