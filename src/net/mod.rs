//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam, `api` the auth client, `auth_header` derives
//! request headers from the stored session, and `types` defines the wire
//! schema.

pub mod api;
pub mod auth_header;
pub mod http;
pub mod types;
