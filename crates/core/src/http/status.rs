//! Pure mapping from [`RecordError`] to HTTP status codes.

use crate::visit::RecordError;

/// Maps a [`RecordError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `Store` -> 500 (Internal Server Error)
/// - `Unexpected` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use visitcount_core::http::record_error_to_status_code;
/// use visitcount_core::visit::{RecordError, ValidationError};
///
/// let error = RecordError::Validation(ValidationError::MissingUserId);
/// assert_eq!(record_error_to_status_code(&error), 400);
/// ```
pub fn record_error_to_status_code(error: &RecordError) -> u16 {
    match error {
        RecordError::Validation(_) => 400,
        RecordError::Store(_) => 500,
        RecordError::Unexpected(_) => 500,
    }
}
