//! Authentication repository.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use reqwest::Method;

use super::client::ApiClient;
use super::error::resolve_message;

pub const LOGIN_FAILED: &str = "An error occurred while authenticating";

/// Extract the compact token from a login response body.
///
/// The backend answers `200` with an empty body when the credentials do not
/// match, so an empty body is not a token.
fn token_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    let token = match serde_json::from_str::<String>(body) {
        Ok(unquoted) => unquoted,
        Err(_) => body.to_owned(),
    };
    (!token.is_empty()).then_some(token)
}

#[derive(Clone, Debug)]
pub struct AuthRepository {
    api: ApiClient,
}

impl AuthRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange `firstName.lastName` and password for a compact token
    /// (`POST /auth/login`).
    ///
    /// # Errors
    ///
    /// Returns the resolved display message on failure, or [`LOGIN_FAILED`]
    /// when the backend accepted the request but issued no token.
    pub async fn login(&self, full_name: &str, password: &str) -> Result<String, String> {
        let request = self
            .api
            .request(Method::POST, "/auth/login")
            .query(&[("fullName", full_name), ("password", password)]);
        let body = self
            .api
            .send_text(request)
            .await
            .map_err(|e| resolve_message(&e, LOGIN_FAILED))?;

        token_from_body(&body).ok_or_else(|| {
            tracing::warn!(%full_name, "login returned no token");
            LOGIN_FAILED.to_owned()
        })
    }
}
