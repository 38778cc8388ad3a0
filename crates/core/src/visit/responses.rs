//! Response bodies for the visit endpoint.

use serde::{Deserialize, Serialize};

/// Message returned with every successfully recorded visit.
pub const VISIT_RECORDED_MESSAGE: &str = "Visit recorded successfully";

/// Success body: `{"message": "...", "visit_count": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordVisitResponse {
    pub message: String,
    pub visit_count: u64,
}

impl RecordVisitResponse {
    pub fn recorded(visit_count: u64) -> Self {
        Self {
            message: VISIT_RECORDED_MESSAGE.to_string(),
            visit_count,
        }
    }
}

/// Pre-flight acknowledgement: `{"message": "OK"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    pub message: String,
}

impl Default for AckResponse {
    fn default() -> Self {
        Self {
            message: "OK".to_string(),
        }
    }
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_body_has_plain_number() {
        let json = serde_json::to_value(RecordVisitResponse::recorded(2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Visit recorded successfully", "visit_count": 2})
        );
        assert!(json["visit_count"].is_u64());
    }

    #[test]
    fn test_ack_body() {
        let json = serde_json::to_string(&AckResponse::default()).unwrap();
        assert_eq!(json, r#"{"message":"OK"}"#);
    }

    #[test]
    fn test_error_body() {
        let json = serde_json::to_string(&ErrorResponse::new("user_id is required")).unwrap();
        assert_eq!(json, r#"{"error":"user_id is required"}"#);
    }
}
