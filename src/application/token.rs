//! URL-safe token codec for pagination and filter values.
//!
//! A token is the standard padded Base64 of the value's JSON with `+`, `/` and
//! `=` replaced by `.`, `_` and `-`. The substitution alphabet is fixed so that
//! links issued earlier keep decoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token payload is not valid JSON for this value: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn encode<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value)?;
    let token = STANDARD
        .encode(json)
        .chars()
        .map(|c| match c {
            '+' => '.',
            '/' => '_',
            '=' => '-',
            other => other,
        })
        .collect();
    Ok(token)
}

pub fn decode<T: DeserializeOwned>(token: &str) -> Result<T, TokenError> {
    let standard: String = token
        .chars()
        .map(|c| match c {
            '.' => '+',
            '_' => '/',
            '-' => '=',
            other => other,
        })
        .collect();
    let json = STANDARD.decode(standard)?;
    Ok(serde_json::from_slice(&json)?)
}
