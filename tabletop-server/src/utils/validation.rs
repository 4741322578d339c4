//! Input validation helpers
//!
//! Create payloads only get required-field checks: strings must carry
//! something other than whitespace, counts must be non-zero. Everything
//! else (capacity ordering, status values, positions) is left to the
//! backend service.

use shared::error::AppError;

/// Validate that a required string is non-empty.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!(
            "Invalid input: {field} is required"
        )));
    }
    Ok(())
}

/// Validate that a required count (party size, capacity, table number) is set.
pub fn validate_required_count(value: i32, field: &str) -> Result<(), AppError> {
    if value == 0 {
        return Err(AppError::validation(format!(
            "Invalid input: {field} is required"
        )));
    }
    Ok(())
}
