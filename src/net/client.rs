//! Shared HTTP client bound to the backend base URL.
//!
//! Every repository goes through [`ApiClient::send`], which plays the role of
//! a response interceptor: transport failures and error statuses are logged
//! once here and handed back as [`RequestError`] for the caller to resolve.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::RequestError;
use crate::config::ApiConfig;

/// Cheaply cloneable handle to the shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build the client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` build error if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self::with_http(http, &config.base_url))
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self { http, base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path such as `/lessons/planned`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request against a backend path.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send a request, turning transport errors and non-success statuses
    /// into [`RequestError`].
    ///
    /// # Errors
    ///
    /// [`RequestError::Transport`] when no response arrived,
    /// [`RequestError::Status`] when the backend answered with a non-2xx
    /// status (the body is captured for message resolution).
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, RequestError> {
        let response = self.send_raw(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), %url, "backend returned error status");
        Err(RequestError::Status { status: status.as_u16(), body })
    }

    /// Send a request and return the response whatever its status.
    ///
    /// # Errors
    ///
    /// [`RequestError::Transport`] when no response arrived.
    pub async fn send_raw(&self, request: RequestBuilder) -> Result<Response, RequestError> {
        request.send().await.map_err(|e| {
            tracing::error!(error = %e, "backend request failed");
            RequestError::Transport(e.to_string())
        })
    }

    /// Send a request and decode a JSON success body.
    ///
    /// # Errors
    ///
    /// Everything [`ApiClient::send`] returns, plus [`RequestError::Decode`]
    /// when the body is not the expected JSON shape.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RequestError> {
        let response = self.send(request).await?;
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        decode_json(&text)
    }

    /// Send a request and return the success body as text.
    ///
    /// # Errors
    ///
    /// Everything [`ApiClient::send`] returns.
    pub async fn send_text(&self, request: RequestBuilder) -> Result<String, RequestError> {
        let response = self.send(request).await?;
        response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))
    }
}

pub(crate) fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, RequestError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::warn!(error = %e, "backend response did not match expected shape");
        RequestError::Decode(e.to_string())
    })
}
