//! Backend service error type

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single call to the backend service
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Request never got a response (connect, TLS, body read, ...)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("status {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// The service answered 2xx but the body did not decode
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SupabaseError {
    /// Build a status error, pulling the service's own message out of the body
    ///
    /// The REST interface reports `message`, the auth API `msg` or
    /// `error_description`; anything else falls back to the status code.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["msg", "message", "error_description", "error"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(String::from))
            })
            .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));

        Self::Status { status, message }
    }

    /// Status returned by the service, if it answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
