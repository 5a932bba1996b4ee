//! Development proxy: `/api/*` is relayed to the backend with the prefix
//! removed, so the browser only ever talks to the page server.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const PROXY_PREFIX: &str = "/api";

/// Backend path for a proxied request, query string included.
///
/// Works on the raw request target so percent-encoded bytes reach the
/// backend exactly as the browser sent them.
fn backend_path(uri: &Uri) -> String {
    let raw = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let stripped = raw.strip_prefix(PROXY_PREFIX).unwrap_or(raw);
    let stripped = stripped.strip_suffix('?').unwrap_or(stripped);
    if stripped.starts_with('/') {
        stripped.to_owned()
    } else {
        format!("/{stripped}")
    }
}

/// `ANY /api/{*path}` — relay to the backend.
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let target = backend_path(&uri);
    tracing::debug!(%method, %target, "proxying to backend");

    let mut request = state.api.request(method, &target);
    for name in [header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let response = match state.api.send_raw(request).await {
        Ok(response) => response,
        Err(e) => return (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
    };

    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "backend response body read failed");
            return (StatusCode::BAD_GATEWAY, "backend response body read failed").into_response();
        }
    };

    let mut relayed = Response::new(Body::from(bytes));
    *relayed.status_mut() = status;
    if let Some(content_type) = content_type {
        relayed.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    relayed
}
