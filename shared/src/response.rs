//! API Response types

use serde::{Deserialize, Serialize};

/// Success body for mutations and plain informational endpoints
///
/// ```json
/// {
///     "message": "Table created successfully",
///     "data": [ { ... } ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse<T = ()> {
    /// Human-readable message
    pub message: String,
    /// Rows returned by the backend service (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl MessageResponse {
    /// Create a message-only response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

impl<T> MessageResponse<Vec<T>> {
    /// Create a response carrying the affected rows, omitted when empty
    pub fn with_rows(message: impl Into<String>, rows: Vec<T>) -> Self {
        Self {
            message: message.into(),
            data: (!rows.is_empty()).then_some(rows),
        }
    }
}
