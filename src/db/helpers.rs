//! Helpers that turn raw query results into `AppError`s.
//!
//! ```ignore
//! let m = require_record(queries.get_match(id).await, "Match not found")?;
//! ```

use crate::error::AppError;

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> Result<T, AppError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(AppError::not_found(not_found_message)),
        Err(e) => Err(AppError::from(e)),
    }
}

/// Turn a positive existence check into a Conflict.
pub fn ensure_not_exists(
    result: Result<bool, sqlx::Error>,
    conflict_message: &str,
) -> Result<(), AppError> {
    match result {
        Ok(true) => Err(AppError::conflict(conflict_message)),
        Ok(false) => Ok(()),
        Err(e) => Err(AppError::from(e)),
    }
}

/// A guarded UPDATE that matched no row means the state changed under us.
pub fn require_transition<T>(
    result: Result<Option<T>, sqlx::Error>,
    precondition_message: &str,
) -> Result<T, AppError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(AppError::precondition(precondition_message)),
        Err(e) => Err(AppError::from(e)),
    }
}
