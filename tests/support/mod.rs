//! Stub lesson backend for repository and page-server tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, Query, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

use skipro_web::config::ApiConfig;
use skipro_web::net::client::ApiClient;

pub const CLIENT_ID: &str = "9b2f0c1e-1111-4222-8333-444455556666";
pub const LESSON_ID: &str = "6f1c2a3e-0000-4000-8000-000000000002";
pub const INSTRUCTOR_ID: &str = "6f1c2a3e-0000-4000-8000-000000000001";
pub const FULL_LESSON_ID: &str = "00000000-0000-0000-0000-0000000000ff";
pub const MISSING_LESSON_ID: &str = "00000000-0000-0000-0000-000000000404";

type Calls = Arc<Mutex<Vec<String>>>;
type Params = Query<HashMap<String, String>>;

/// Running stub backend.
pub struct StubBackend {
    pub base_url: String,
    calls: Calls,
}

impl StubBackend {
    /// Requests received so far, as `METHOD /path?query`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(&ApiConfig::new(&self.base_url)).unwrap()
    }
}

/// Bind the stub on an ephemeral port and serve it in the background.
pub async fn spawn_backend() -> StubBackend {
    let calls: Calls = Arc::default();
    let app = Router::new()
        .route("/lessons", post(enrolled_lessons))
        .route("/lessons/planned", post(planned_lessons))
        .route("/lessons/finished", post(finished_lessons))
        .route("/lessons/enroll", post(enroll))
        .route("/lessons/remove", post(remove))
        .route("/lessons/create", post(create_lesson))
        .route("/lessons/{lesson_id}/clients", get(lesson_clients))
        .route("/instructors", get(instructors))
        .route("/auth/login", post(login))
        .route("/echo", post(echo))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(middleware::from_fn_with_state(calls.clone(), record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend { base_url: format!("http://{addr}"), calls }
}

/// Client pointed at a port nothing listens on.
pub fn unreachable_api() -> ApiClient {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    ApiClient::new(&ApiConfig::new(&format!("http://127.0.0.1:{port}"))).unwrap()
}

/// Compact token with the given JSON payload.
pub fn token_for(payload: &str) -> String {
    format!("{}.{}.sig", URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#), URL_SAFE_NO_PAD.encode(payload))
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn record(State(calls): State<Calls>, request: Request, next: Next) -> Response {
    let line = format!("{} {}", request.method(), request.uri());
    calls.lock().unwrap().push(line);
    next.run(request).await
}

fn lesson_tile(id: &str, status: &str, clients_count: u64) -> serde_json::Value {
    json!({
        "id": id,
        "date": "2025-01-20 | 10:00",
        "duration": "1h 30m",
        "status": status,
        "instructor": {
            "id": INSTRUCTOR_ID,
            "firstName": "Anna",
            "lastName": "Nowak",
            "qualificationLevel": "ADVANCED",
            "rating": 4.5
        },
        "clientsCount": clients_count,
        "capacity": 5
    })
}

async fn enrolled_lessons(Query(params): Params) -> Response {
    if params.get("clientId").map(String::as_str) != Some(CLIENT_ID) {
        return StatusCode::NOT_FOUND.into_response();
    }
    axum::Json(json!([lesson_tile(LESSON_ID, "PLANNED", 2)])).into_response()
}

async fn planned_lessons(Query(params): Params) -> Response {
    if !params.contains_key("clientId") {
        return (StatusCode::BAD_REQUEST, "Required parameter 'clientId' is not present.").into_response();
    }
    axum::Json(json!([
        lesson_tile(LESSON_ID, "PLANNED", 0),
        lesson_tile(FULL_LESSON_ID, "PLANNED", 5)
    ]))
    .into_response()
}

async fn finished_lessons() -> Response {
    let body = json!({
        "timestamp": "2025-01-20T10:00:00.000+00:00",
        "status": 500,
        "error": "Internal Server Error",
        "path": "/lessons/finished"
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}

async fn enroll(Query(params): Params) -> Response {
    match params.get("lessonId").map(String::as_str) {
        Some(FULL_LESSON_ID) => StatusCode::CONFLICT.into_response(),
        Some(MISSING_LESSON_ID) => {
            (StatusCode::NOT_FOUND, axum::Json(json!({"message": "Lesson or client not found"}))).into_response()
        }
        Some(_) => StatusCode::OK.into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn remove(Query(params): Params) -> Response {
    match params.get("lessonId").map(String::as_str) {
        Some(MISSING_LESSON_ID) => StatusCode::NOT_FOUND.into_response(),
        Some(_) => StatusCode::OK.into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn create_lesson(Query(params): Params) -> Response {
    if params.get("capacity").map(String::as_str) == Some("0") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    StatusCode::OK.into_response()
}

async fn lesson_clients(Path(lesson_id): Path<String>) -> Response {
    if lesson_id == MISSING_LESSON_ID {
        return StatusCode::NOT_FOUND.into_response();
    }
    if lesson_id == "not-a-uuid" {
        return StatusCode::IM_A_TEAPOT.into_response();
    }
    axum::Json(json!([
        {"id": CLIENT_ID, "firstName": "Jan", "lastName": "Kowalski", "age": 31, "experience": "BEGINNER"}
    ]))
    .into_response()
}

async fn instructors() -> Response {
    axum::Json(json!([
        {"id": INSTRUCTOR_ID, "firstName": "Anna", "lastName": "Nowak", "qualificationLevel": "ADVANCED", "rating": 4.5}
    ]))
    .into_response()
}

async fn login(Query(params): Params) -> Response {
    let full_name = params.get("fullName").map(String::as_str);
    let password = params.get("password").map(String::as_str);
    if full_name == Some("Jan.Kowalski") && password == Some("secret") {
        let token = token_for(&format!(r#"{{"sub":"Jan.Kowalski","id":"{CLIENT_ID}"}}"#));
        return ([(header::CONTENT_TYPE, "text/plain")], token).into_response();
    }
    // The real backend answers 200 with an empty body on bad credentials.
    StatusCode::OK.into_response()
}

async fn echo(request: Request) -> Response {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let query = request.uri().query().unwrap_or_default().to_owned();
    let body = axum::body::to_bytes(request.into_body(), usize::MAX).await.unwrap();
    let echoed = json!({
        "contentType": content_type,
        "query": query,
        "body": String::from_utf8_lossy(&body),
    });
    (StatusCode::ACCEPTED, axum::Json(echoed)).into_response()
}
