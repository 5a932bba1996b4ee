//! Page load guards and the login/logout form handlers.
//!
//! A guard reads the `token` cookie, decodes the subject without verifying
//! it, and either redirects or returns the page's load data as JSON.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use axum::Form;
use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::state::AppState;
use crate::util::jwt::{get_client_id_from_token, get_sub_from_token};

pub const TOKEN_COOKIE: &str = "token";
pub const LANDING_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Matches the backend's token lifetime.
const TOKEN_COOKIE_MAX_AGE: Duration = Duration::days(1);

// =============================================================================
// GUARDS
// =============================================================================

/// Outcome of a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLoad<T> {
    /// Render the page with this load data.
    Render(T),
    /// Send the visitor elsewhere with a `302 Found`.
    Redirect(&'static str),
}

impl<T: Serialize> IntoResponse for PageLoad<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Render(data) => Json(data).into_response(),
            Self::Redirect(location) => found(location),
        }
    }
}

/// Load data for the landing (login) page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingData {}

/// Load data for the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub active_user: String,
    pub client_id: Option<String>,
}

/// Signed-in visitors skip the landing page.
pub fn landing_guard(token: Option<&str>) -> PageLoad<LandingData> {
    match get_sub_from_token(token) {
        Some(_) => PageLoad::Redirect(DASHBOARD_PATH),
        None => PageLoad::Render(LandingData::default()),
    }
}

/// The dashboard requires a decodable subject.
pub fn dashboard_guard(token: Option<&str>) -> PageLoad<DashboardData> {
    let Some(active_user) = get_sub_from_token(token) else {
        return PageLoad::Redirect(LANDING_PATH);
    };
    PageLoad::Render(DashboardData { active_user, client_id: get_client_id_from_token(token) })
}

fn token_cookie(jar: &CookieJar) -> Option<&str> {
    jar.get(TOKEN_COOKIE).map(Cookie::value)
}

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

fn build_token_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(TOKEN_COOKIE_MAX_AGE)
        .build()
}

fn clear_token_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /` — landing page load.
pub async fn landing(jar: CookieJar) -> Response {
    landing_guard(token_cookie(&jar)).into_response()
}

/// `GET /dashboard` — dashboard page load.
pub async fn dashboard(jar: CookieJar) -> Response {
    dashboard_guard(token_cookie(&jar)).into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub full_name: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginFailure {
    pub message: String,
}

/// `POST /login` — exchange credentials for a token cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Form(form): Form<LoginForm>) -> Response {
    match state.auth.login(&form.full_name, &form.password).await {
        Ok(token) => {
            tracing::info!(full_name = %form.full_name, "login succeeded");
            let jar = jar.add(build_token_cookie(token, state.cookie_secure));
            (jar, found(DASHBOARD_PATH)).into_response()
        }
        Err(message) => {
            tracing::warn!(full_name = %form.full_name, %message, "login failed");
            (StatusCode::UNAUTHORIZED, Json(LoginFailure { message })).into_response()
        }
    }
}

/// `POST /logout` — clear the token cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let jar = jar.add(clear_token_cookie(state.cookie_secure));
    (jar, found(LANDING_PATH)).into_response()
}
