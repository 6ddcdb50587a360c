//! Boundary checks for GraphQL inputs
//!
//! Input objects convert into upstream request types through `TryFrom`
//! impls built on these helpers, so a bad argument fails before any
//! request leaves the process.

use crate::error::{ApiError, ApiResult};

/// Require a non-blank string
pub fn require_text(field: &str, value: String) -> ApiResult<String> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} must not be blank", field)));
    }
    Ok(value)
}

/// Check a string only when it was supplied
pub fn optional_text(field: &str, value: Option<String>) -> ApiResult<Option<String>> {
    value.map(|v| require_text(field, v)).transpose()
}

/// Require an integer of at least `min` when one was supplied
pub fn at_least(field: &str, value: Option<i32>, min: i32) -> ApiResult<Option<i32>> {
    match value {
        Some(v) if v < min => Err(ApiError::validation(format!(
            "{} must be at least {} (got {})",
            field, min, v
        ))),
        other => Ok(other),
    }
}
