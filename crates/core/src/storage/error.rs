use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Throttled: {0}")]
    Throttled(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// The message carried by the error, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::ConnectionFailed(message)
            | Self::Throttled(message)
            | Self::PermissionDenied(message)
            | Self::QueryFailed(message)
            | Self::InvalidData(message) => message,
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
