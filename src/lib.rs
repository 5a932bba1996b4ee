//! # skipro-web
//!
//! Client side of the ski-school lesson booking application.
//!
//! This crate contains the REST client and repositories for the lesson
//! backend, the unverified token decoder, the page server that guards the
//! landing and dashboard pages on the `token` cookie, and the observable
//! stores that back the confirmation modals.

pub mod config;
pub mod net;
pub mod routes;
pub mod state;
pub mod stores;
pub mod util;
