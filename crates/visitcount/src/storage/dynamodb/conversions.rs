//! DynamoDB attribute conversion functions.
//!
//! Pure functions for reading the counter out of an `UpdateItem` response.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use visitcount_core::storage::RepositoryError;

use super::attributes::VISIT_COUNT;

/// Reads the post-update counter from `UPDATED_NEW` attributes.
///
/// A response without the attribute counts as the first visit.
pub fn visit_count_from_attributes(
    attributes: Option<&HashMap<String, AttributeValue>>,
) -> Result<u64, RepositoryError> {
    match attributes.and_then(|item| item.get(VISIT_COUNT)) {
        None => {
            tracing::debug!("UpdateItem returned no visit_count, assuming first visit");
            Ok(1)
        }
        Some(AttributeValue::N(raw)) => parse_count(raw),
        Some(other) => Err(RepositoryError::InvalidData(format!(
            "Invalid field {VISIT_COUNT}: expected a number, got {other:?}"
        ))),
    }
}

/// Converts a DynamoDB `N` (decimal string) into a plain counter.
pub fn parse_count(raw: &str) -> Result<u64, RepositoryError> {
    let raw = raw.trim();
    if let Ok(count) = raw.parse::<u64>() {
        return Ok(count);
    }

    // Decimal renderings such as "3.0" or "1E+1".
    match raw.parse::<f64>() {
        Ok(value)
            if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 =>
        {
            Ok(value as u64)
        }
        _ => Err(RepositoryError::InvalidData(format!(
            "Invalid field {VISIT_COUNT}: {raw:?} is not a non-negative integer"
        ))),
    }
}
