//! Failure values for backend calls and their display-string resolution.
//!
//! ERROR HANDLING
//! ==============
//! Repositories keep failures typed as [`RequestError`] until the last step,
//! then flatten them with [`resolve_message`] into the single string the UI
//! renders. Nothing here retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// A failed backend call.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16, body: String },

    /// A success response whose body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Fixed display text for well-known status codes.
pub fn status_message(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("Bad request"),
        401 => Some("Unauthorized"),
        403 => Some("Forbidden"),
        404 => Some("Not found"),
        409 => Some("Conflict"),
        500 => Some("Server error"),
        _ => None,
    }
}

/// Resolve a failure into the message shown to the user.
///
/// Precedence: no response → `fallback`; non-empty string body → the body
/// verbatim; object body → its non-empty `message`, then `error`; otherwise
/// the status table, then `fallback`.
pub fn resolve_message(err: &RequestError, fallback: &str) -> String {
    let RequestError::Status { status, body } = err else {
        return fallback.to_owned();
    };

    if let Some(text) = body_message(body) {
        return text;
    }

    status_message(*status).map_or_else(|| fallback.to_owned(), str::to_owned)
}

/// Text carried by an error body, if any.
fn body_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => (!text.is_empty()).then_some(text),
        Ok(Value::Object(map)) => ["message", "error"].iter().find_map(|key| match map.get(*key) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }),
        Ok(_) => None,
        Err(_) => (!body.is_empty()).then(|| body.to_owned()),
    }
}
