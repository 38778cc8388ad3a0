//! Request payloads for the visit endpoint.
//!
//! Shared between the server and the client so both sides agree on the wire
//! format. Parsing is pure: it never touches the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ValidationError;

/// Body of a visit submission: `{"user_id": "<string>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordVisitRequest {
    pub user_id: String,
}

impl RecordVisitRequest {
    /// Create a request for the given user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Parse and validate a raw request body.
    ///
    /// An empty body is read as `{}`. Anything else that is
    /// not UTF-8, not JSON, or not a JSON object is [`ValidationError::InvalidJson`].
    /// A `user_id` that is absent, not a string, or empty is
    /// [`ValidationError::MissingUserId`].
    pub fn parse(body: &[u8]) -> Result<Self, ValidationError> {
        if body.is_empty() {
            return Err(ValidationError::MissingUserId);
        }

        let text = std::str::from_utf8(body).map_err(|_| ValidationError::InvalidJson)?;

        let value: Value = serde_json::from_str(text).map_err(|_| ValidationError::InvalidJson)?;
        let Value::Object(fields) = value else {
            return Err(ValidationError::InvalidJson);
        };

        match fields.get("user_id") {
            Some(Value::String(user_id)) if !user_id.is_empty() => Ok(Self::new(user_id.clone())),
            _ => Err(ValidationError::MissingUserId),
        }
    }
}
