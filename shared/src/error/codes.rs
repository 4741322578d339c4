//! Unified error codes for the Tabletop backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 9xxx: System and upstream errors

use std::fmt;

/// Unified error code enum
///
/// Codes never leave the process on the wire (error bodies are plain
/// `{"error": "..."}` objects); they drive status mapping and log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Sign-up rejected by the auth service
    RegistrationFailed = 1008,

    // ==================== 9xxx: System ====================
    NetworkError = 9003,
    /// Backend service answered with a non-success status
    UpstreamRejected = 9010,
    /// Backend service answered with a body we could not decode
    UpstreamResponseInvalid = 9011,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::RegistrationFailed => "Registration failed",

            // System
            ErrorCode::NetworkError => "Network error",
            ErrorCode::UpstreamRejected => "Backend service rejected the request",
            ErrorCode::UpstreamResponseInvalid => "Failed to parse response",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
