//! HTTP client for the visitcount endpoint.

pub mod visits;

use visitcount_core::visit::ErrorResponse;

use crate::error::{ClientError, Result};

/// Endpoint used when neither `--endpoint` nor `VISITCOUNT_URL` is set.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/visits";

/// HTTP client for the visitcount endpoint.
#[derive(Debug, Clone)]
pub struct VisitClient {
    client: reqwest::Client,
    endpoint: String,
}

impl VisitClient {
    /// Create a new client posting to the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Handle error responses.
    ///
    /// The function answers failures with `{"error": "..."}`; that message is
    /// surfaced as-is, anything else falls back to the raw body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(envelope) => envelope.error,
            Err(_) => body,
        };

        Err(ClientError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}
