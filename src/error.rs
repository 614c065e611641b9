//! Error types for the Anthropic API client.
//!
//! [`ClientError`] is the single error type returned by every fallible
//! operation in this crate. Failure responses from the API carry a structured
//! body that deserializes into [`ApiError`] and renders as
//! `"<category>: <message>"`; bodies that do not match that shape fall back
//! to [`ClientError::UnexpectedStatus`].

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Nested detail object of a structured API error body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetails {
    /// Error subtype, e.g. `invalid_request_error`
    #[serde(rename = "type", default)]
    pub error_type: String,
    /// Human-readable description of what went wrong
    pub message: String,
}

/// Structured error body returned by the API on non-success responses.
///
/// Wire shape: `{"type": "error", "error": {"type": "...", "message": "..."}}`.
/// The `error` object and its `message` are required; a body without them is
/// not treated as a structured error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Category label, e.g. `error`
    #[serde(rename = "type", default)]
    pub error_type: String,
    pub error: ApiErrorDetails,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type, self.error.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors produced by the client, the request/response codecs, and the
/// stream decoder.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Reading from the response byte stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The API returned a structured error body
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Non-success status whose body did not match the structured error shape
    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),
}
