//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page server answers the landing and dashboard page loads (guarded
//! on the `token` cookie), the login/logout form posts, and relays
//! `/api/*` to the backend the way the development proxy does.

pub mod pages;
pub mod proxy;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full page-server router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/dashboard", get(pages::dashboard))
        .route("/login", post(pages::login))
        .route("/logout", post(pages::logout))
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
