//! Networking modules for the lesson backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns the shared `reqwest` client bound to the backend base URL,
//! `error` turns failed calls into display strings, `lessons` and `auth` are
//! the per-resource repositories, and `types` defines the wire schema.

pub mod auth;
pub mod client;
pub mod error;
pub mod lessons;
pub mod types;
