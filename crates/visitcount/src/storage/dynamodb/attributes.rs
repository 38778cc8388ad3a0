//! DynamoDB attribute names, update expressions and key construction.
//!
//! Pure functions with no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{Days, NaiveDate};

use visitcount_core::visit::VisitKey;

// ============================================================================
// Attribute names
// ============================================================================

/// Partition key (`S`, `YYYY-MM-DD`).
pub const VISIT_DATE: &str = "visit_date";
/// Sort key (`S`).
pub const USER_ID: &str = "user_id";
/// Counter (`N`).
pub const VISIT_COUNT: &str = "visit_count";
/// TTL attribute (`N`, epoch seconds).
pub const EXPIRES_AT: &str = "expires_at";

// ============================================================================
// Update expressions
// ============================================================================

pub const INCREMENT_PLACEHOLDER: &str = ":inc";
pub const EXPIRES_AT_PLACEHOLDER: &str = ":expires_at";

/// Atomic add; creates the item with `visit_count = 1` when absent.
pub const INCREMENT_EXPRESSION: &str = "ADD visit_count :inc";

/// Atomic add that also stamps the expiry on the first write only.
pub const INCREMENT_WITH_EXPIRY_EXPRESSION: &str =
    "SET expires_at = if_not_exists(expires_at, :expires_at) ADD visit_count :inc";

/// Composite primary key for a visit counter.
pub fn key_item(key: &VisitKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            VISIT_DATE.to_string(),
            AttributeValue::S(key.visit_date_string()),
        ),
        (USER_ID.to_string(), AttributeValue::S(key.user_id.clone())),
    ])
}

/// Epoch seconds at which a counter for `visit_date` expires.
///
/// Retention is counted from the end of the visit day: a counter for
/// 2024-06-15 kept for 1 day expires at 2024-06-17T00:00:00Z.
pub fn expires_at(visit_date: NaiveDate, ttl_days: u32) -> Option<i64> {
    visit_date
        .checked_add_days(Days::new(u64::from(ttl_days) + 1))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp())
}

/// Update expression plus placeholder values for one increment.
#[derive(Debug, Clone, PartialEq)]
pub struct IncrementUpdate {
    pub expression: &'static str,
    pub values: HashMap<String, AttributeValue>,
}

/// Picks the update for a counter on `visit_date`.
///
/// With `ttl_days` the first write also stamps `expires_at`; without it the
/// update is a bare `ADD`.
pub fn increment_update(visit_date: NaiveDate, ttl_days: Option<u32>) -> IncrementUpdate {
    let mut values = HashMap::from([(
        INCREMENT_PLACEHOLDER.to_string(),
        AttributeValue::N("1".to_string()),
    )]);

    match ttl_days.and_then(|days| expires_at(visit_date, days)) {
        Some(expires_at) => {
            values.insert(
                EXPIRES_AT_PLACEHOLDER.to_string(),
                AttributeValue::N(expires_at.to_string()),
            );
            IncrementUpdate {
                expression: INCREMENT_WITH_EXPIRY_EXPRESSION,
                values,
            }
        }
        None => IncrementUpdate {
            expression: INCREMENT_EXPRESSION,
            values,
        },
    }
}
