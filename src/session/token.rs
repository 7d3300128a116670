//! Compact signed-token (JWS) claim decoding.
//!
//! The browser never holds the signing key, so decoding here only reads the
//! payload segment; the backend verifies the signature on every request.
//! Anything that does not decode to a `sub` + `exp` payload is rejected;
//! the other claims never invalidate a token.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// base64url, accepting segments with or without `=` padding.
const SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token must have three dot-separated segments, found {0}")]
    Segments(usize),
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not a claims object: {0}")]
    Claims(String),
    #[error("token expired at {0}")]
    Expired(i64),
}

/// Decoded token payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// User identity the token was issued for.
    pub sub: String,
    /// Expiry, seconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub exp: i64,
    /// Issue time when it reads as an integer; anything else is ignored.
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub iat: Option<i64>,
    /// String entries of `roles`; a missing, null or non-array value is empty.
    #[serde(default, deserialize_with = "deserialize_roles")]
    pub roles: Vec<String>,
}

impl Claims {
    /// A token is expired once `exp` is not strictly in the future.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp <= now_secs
    }
}

/// Decode the claims of a compact token without verifying its signature.
///
/// # Errors
///
/// Returns [`TokenError`] if the token is not three segments, the payload is
/// not base64url, or the payload JSON lacks `sub`/`exp`.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(TokenError::Segments(segments.len()));
    };
    let bytes = SEGMENT
        .decode(*payload)
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// Decode `token` and require it to be unexpired at `now_secs`.
///
/// # Errors
///
/// Any [`decode_claims`] error, or [`TokenError::Expired`].
pub fn validate(token: &str, now_secs: i64) -> Result<Claims, TokenError> {
    let claims = decode_claims(token)?;
    if claims.is_expired(now_secs) {
        return Err(TokenError::Expired(claims.exp));
    }
    Ok(claims)
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    integral(&value).ok_or_else(|| D::Error::custom("expected integer-compatible number"))
}

fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text.trim().parse().ok(),
        value => integral(&value),
    })
}

fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Array(items) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::String(role) => Some(role),
            _ => None,
        })
        .collect())
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn integral(value: &serde_json::Value) -> Option<i64> {
    let serde_json::Value::Number(number) = value else {
        return None;
    };
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}
