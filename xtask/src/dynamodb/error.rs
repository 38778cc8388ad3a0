//! Error types for DynamoDB operations.

use aws_sdk_dynamodb::error::DisplayErrorContext;
use thiserror::Error;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Timeout waiting for table to become active")]
    TableActivationTimeout,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl DynamodbError {
    /// Wraps any SDK error with its full source chain.
    pub fn sdk<E: std::error::Error>(err: E) -> Self {
        Self::AwsSdk(DisplayErrorContext(err).to_string())
    }
}
