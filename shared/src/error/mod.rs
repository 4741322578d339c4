//! Unified error system for the Tabletop backend
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by range
//! - [`AppError`]: Error type with code, message and optional relayed status
//! - [`ErrorBody`]: The `{"error": "..."}` body every failure is rendered as
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 9xxx: System errors (including backend-service failures)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//! use http::StatusCode;
//!
//! let err = AppError::new(ErrorCode::NotFound);
//! assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
//!
//! // Relay the backend's own status with a static message
//! let err = AppError::upstream(StatusCode::CONFLICT, "Failed to create table");
//! assert_eq!(err.http_status(), StatusCode::CONFLICT);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
