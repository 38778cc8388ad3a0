use thiserror::Error;

use crate::storage::RepositoryError;

/// Reasons a submission is rejected before touching the store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid JSON in request body")]
    InvalidJson,
    #[error("user_id is required")]
    MissingUserId,
}

/// Everything that can go wrong while recording a visit.
///
/// The `Display` output of each variant is the message returned to the caller
/// in the `error` field of the response body. Store failures show the store's
/// message as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", .0.message())]
    Store(#[from] RepositoryError),
    #[error("{0}")]
    Unexpected(String),
}
