//! Unverified compact-token payload decoding.
//!
//! The decoder only reads the payload segment so pages can show who is
//! signed in and route on it. It never checks the signature, expiry, or
//! issuer; the backend is the only trust boundary.
//!
//! Malformed input of any kind yields `None`, never an error.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// URL-safe engine that tolerates both padded and unpadded input.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Claims the backend puts in its tokens. Every field is optional because
/// nothing about the payload is trusted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub sub: Option<String>,
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub exp: Option<i64>,
    pub iat: Option<i64>,
}

/// Subject (`sub`) of the token, e.g. `"Jan.Kowalski"`.
pub fn get_sub_from_token(token: Option<&str>) -> Option<String> {
    claim_string(token, "sub")
}

/// Client identifier (`id`) of the token.
pub fn get_client_id_from_token(token: Option<&str>) -> Option<String> {
    claim_string(token, "id")
}

/// Typed view of the display claims. Claims of an unexpected type are
/// dropped rather than failing the whole decode.
pub fn decode_claims(token: Option<&str>) -> Option<TokenClaims> {
    let payload = decode_payload(token?)?;
    Some(TokenClaims {
        sub: field_string(&payload, "sub"),
        id: field_string(&payload, "id"),
        first_name: field_string(&payload, "firstName"),
        last_name: field_string(&payload, "lastName"),
        exp: payload.get("exp").and_then(Value::as_i64),
        iat: payload.get("iat").and_then(Value::as_i64),
    })
}

/// A single named claim rendered as a string.
pub fn claim_string(token: Option<&str>, name: &str) -> Option<String> {
    let payload = decode_payload(token?)?;
    field_string(&payload, name)
}

/// Decode the middle segment of a three-part token into a JSON object.
pub fn decode_payload(token: &str) -> Option<Map<String, Value>> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return None;
    };

    let bytes = decode_segment(payload)?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    // Accept the standard alphabet too.
    let normalized: String = segment
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    PAYLOAD_ENGINE.decode(normalized).ok()
}

/// Falsy values (`""`, `0`, `false`, `null`) count as absent.
fn field_string(payload: &Map<String, Value>, name: &str) -> Option<String> {
    match payload.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|v| v.abs() > 0.0) => Some(n.to_string()),
        _ => None,
    }
}
