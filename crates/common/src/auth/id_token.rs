//! Unverified reads of OpenID Connect id token claims.
//!
//! The signature is not checked. The token arrives directly from the identity
//! provider over TLS and only display claims are read from it.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdTokenError {
    #[error("id token is not a JWT: expected three dot-separated segments")]
    Malformed,
    #[error("failed to decode id token payload: {0}")]
    Encoding(String),
    #[error("id token payload is not a JSON object: {0}")]
    Payload(String),
}

/// Decode the claim set (second segment) of a JWT.
pub fn decode_claims(id_token: &str) -> Result<Map<String, Value>, IdTokenError> {
    let parts: Vec<&str> = id_token.split('.').collect();
    if parts.len() != 3 {
        return Err(IdTokenError::Malformed);
    }

    // Some issuers keep base64 padding on the segments.
    let payload_bytes = URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|err| IdTokenError::Encoding(err.to_string()))?;

    match serde_json::from_slice::<Value>(&payload_bytes) {
        Ok(Value::Object(claims)) => Ok(claims),
        Ok(other) => Err(IdTokenError::Payload(format!("found {other}"))),
        Err(err) => Err(IdTokenError::Payload(err.to_string())),
    }
}

/// The `name` claim, when present and a string.
///
/// Fails only when the token itself cannot be decoded.
pub fn display_name(id_token: &str) -> Result<Option<String>, IdTokenError> {
    let claims = decode_claims(id_token)?;
    Ok(claims.get("name").and_then(Value::as_str).map(str::to_owned))
}
