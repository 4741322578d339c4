//! Backend-service failures as API errors
//!
//! Handlers never show the service's raw error to clients for row
//! operations: each call site names a static failure message
//! ("Failed to fetch tables") and the bridge picks the status.
//!
//! - transport failure → 500 with the static message
//! - non-success status → the service's status with the static message
//! - undecodable body → 500 "Failed to parse response"
//!
//! Auth calls are the exception: the service's own message is what the
//! user needs to see ("User already registered").

use shared::error::{AppError, AppResult};

use crate::supabase::SupabaseError;

/// Convert a backend-service result into an API result
pub trait UpstreamResultExt<T> {
    /// Map failures to `failure`, relaying the service's status
    fn or_upstream(self, failure: &str) -> AppResult<T>;

    /// Like [`or_upstream`](Self::or_upstream), appending the relayed status
    /// code to the message: `"<failure>, status code: 404"`
    fn or_upstream_with_status(self, failure: &str) -> AppResult<T>;
}

impl<T> UpstreamResultExt<T> for Result<T, SupabaseError> {
    fn or_upstream(self, failure: &str) -> AppResult<T> {
        self.map_err(|e| upstream_error(e, failure, false))
    }

    fn or_upstream_with_status(self, failure: &str) -> AppResult<T> {
        self.map_err(|e| upstream_error(e, failure, true))
    }
}

fn upstream_error(err: SupabaseError, failure: &str, include_status: bool) -> AppError {
    match err {
        SupabaseError::Transport(e) => {
            tracing::warn!(error = %e, failure, "Backend service unreachable");
            AppError::network(failure)
        }
        SupabaseError::Status { status, message } => {
            tracing::warn!(
                status = %status.as_u16(),
                upstream = %message,
                failure,
                "Backend service rejected request"
            );
            if include_status {
                AppError::upstream(status, format!("{failure}, status code: {}", status.as_u16()))
            } else {
                AppError::upstream(status, failure)
            }
        }
        SupabaseError::Decode(e) => {
            tracing::warn!(error = %e, failure, "Backend service response did not decode");
            AppError::upstream_response_invalid()
        }
    }
}

/// Map a sign-up failure: rejected → 400 with the service's message
pub fn signup_error(err: SupabaseError) -> AppError {
    match err {
        SupabaseError::Status { status, message } => {
            tracing::info!(status = %status.as_u16(), reason = %message, "Registration rejected");
            AppError::registration_failed(message)
        }
        other => auth_unavailable(other, "Failed to register user"),
    }
}

/// Map a sign-in failure: rejected → 401 with the service's message
pub fn signin_error(err: SupabaseError) -> AppError {
    match err {
        SupabaseError::Status { status, message } => {
            tracing::info!(status = %status.as_u16(), reason = %message, "Login rejected");
            AppError::invalid_credentials(message)
        }
        other => auth_unavailable(other, "Failed to log in"),
    }
}

fn auth_unavailable(err: SupabaseError, failure: &str) -> AppError {
    match err {
        SupabaseError::Decode(e) => {
            tracing::warn!(error = %e, "Auth response did not decode");
            AppError::upstream_response_invalid()
        }
        e => {
            tracing::warn!(error = %e, failure, "Auth service unreachable");
            AppError::network(failure)
        }
    }
}
