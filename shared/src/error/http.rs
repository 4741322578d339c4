//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Transport failures towards the backend service are 500.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 401 Unauthorized
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 502 Bad Gateway (only when no upstream status is relayed)
            Self::UpstreamRejected => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            Self::NetworkError | Self::UpstreamResponseInvalid => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation and rejected registrations)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RegistrationFailed => StatusCode::BAD_REQUEST,
        }
    }
}
