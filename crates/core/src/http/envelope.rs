//! The proxy response envelope: `{statusCode, headers, body}`.
//!
//! Every response the recorder produces, success or error, goes through this
//! type, which guarantees the cross-origin headers are present.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::visit::{AckResponse, ErrorResponse, RecordError, RecordVisitResponse};

use super::{cors_headers, record_error_to_status_code};

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// A complete HTTP response with a JSON string body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    /// Serializes `body` as JSON and attaches the standard headers.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        let body = serde_json::to_string(body)
            .unwrap_or_else(|err| serde_json::json!({ "error": err.to_string() }).to_string());

        let mut headers: BTreeMap<String, String> = cors_headers()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        Self {
            status_code,
            headers,
            body,
        }
    }

    /// 200 `{"message": "OK"}` for pre-flight probes.
    pub fn preflight() -> Self {
        Self::json(200, &AckResponse::default())
    }

    /// 200 with the post-increment count.
    pub fn recorded(visit_count: u64) -> Self {
        Self::json(200, &RecordVisitResponse::recorded(visit_count))
    }

    /// The error envelope for a failed submission.
    pub fn error(error: &RecordError) -> Self {
        Self::json(
            record_error_to_status_code(error),
            &ErrorResponse::new(error.to_string()),
        )
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Converts into an `http::Response` for HTTP front ends.
    pub fn into_http(self) -> Result<http::Response<String>, http::Error> {
        let mut builder = http::Response::builder().status(self.status_code);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RepositoryError;
    use crate::visit::ValidationError;

    fn assert_cors(response: &ProxyResponse) {
        assert_eq!(response.header("access-control-allow-origin"), Some("*"));
        assert_eq!(
            response.header("Access-Control-Allow-Headers"),
            Some("Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token")
        );
        assert_eq!(
            response.header("Access-Control-Allow-Methods"),
            Some("OPTIONS,POST")
        );
    }

    #[test]
    fn test_preflight() {
        let response = ProxyResponse::preflight();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"OK"}"#);
        assert_cors(&response);
    }

    #[test]
    fn test_recorded() {
        let response = ProxyResponse::recorded(7);
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            r#"{"message":"Visit recorded successfully","visit_count":7}"#
        );
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_cors(&response);
    }

    #[test]
    fn test_validation_error_envelope() {
        let response = ProxyResponse::error(&ValidationError::InvalidJson.into());
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"error":"Invalid JSON in request body"}"#);
        assert_cors(&response);
    }

    #[test]
    fn test_store_error_envelope() {
        let error = RecordError::Store(RepositoryError::QueryFailed(
            "Requested resource not found".into(),
        ));
        let response = ProxyResponse::error(&error);
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, r#"{"error":"Requested resource not found"}"#);
        assert_cors(&response);
    }

    #[test]
    fn test_serializes_with_status_code_key() {
        let json = serde_json::to_value(ProxyResponse::preflight()).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(json["body"], r#"{"message":"OK"}"#);
    }

    #[test]
    fn test_into_http() {
        let response = ProxyResponse::error(&ValidationError::MissingUserId.into())
            .into_http()
            .unwrap();

        assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["access-control-allow-methods"],
            "OPTIONS,POST"
        );
        assert_eq!(response.body(), r#"{"error":"user_id is required"}"#);
    }
}
