//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! [`visitcount_core::storage::VisitRepository`].
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled; it backs the test suite and the
//! local development server.
//!
//! # Examples
//!
//! Build without DynamoDB:
//! ```bash
//! cargo build -p visitcount --no-default-features
//! ```

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use inmemory::InMemoryVisitRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbVisitRepository;
