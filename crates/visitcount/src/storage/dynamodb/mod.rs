//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of
//! [`visitcount_core::storage::VisitRepository`] using `aws-sdk-dynamodb`.

mod attributes;
mod client;
mod conversions;
mod error;
mod repository;

pub use client::{create_client, shared_client};
pub use repository::DynamoDbVisitRepository;
