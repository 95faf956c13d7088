//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control is not done
//! here: `app.rs` wraps protected pages in `ProtectedRoute`, whose condition
//! (`util::auth::route_condition`) is checked before the page view is built.

pub mod login;
pub mod main_page;
pub mod profile;
