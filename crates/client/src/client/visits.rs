//! Visit API operations.

use reqwest::Method;
use visitcount_core::visit::{AckResponse, RecordVisitRequest, RecordVisitResponse};

use super::VisitClient;
use crate::error::Result;

impl VisitClient {
    /// Record one visit for `user_id` and return today's count.
    pub async fn record_visit(&self, user_id: &str) -> Result<RecordVisitResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&RecordVisitRequest::new(user_id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Send the cross-origin pre-flight probe.
    pub async fn preflight(&self) -> Result<AckResponse> {
        let response = self
            .client
            .request(Method::OPTIONS, &self.endpoint)
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "Content-Type")
            .send()
            .await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::{
        body::Bytes,
        http::{Method as AxumMethod, StatusCode},
        response::IntoResponse,
        routing::post,
        Json, Router,
    };
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    use super::*;
    use crate::error::ClientError;

    type Counts = Arc<Mutex<HashMap<String, u64>>>;

    /// A stand-in for the function that speaks the same wire format.
    async fn fake_function(
        axum::extract::State(counts): axum::extract::State<Counts>,
        method: AxumMethod,
        body: Bytes,
    ) -> axum::response::Response {
        if method == AxumMethod::OPTIONS {
            return Json(serde_json::json!({"message": "OK"})).into_response();
        }

        let user_id = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value["user_id"].as_str().map(str::to_string))
            .filter(|user_id| !user_id.is_empty());

        match user_id {
            Some(user_id) => {
                let mut counts = counts.lock().await;
                let count = counts.entry(user_id).or_insert(0);
                *count += 1;
                Json(serde_json::json!({
                    "message": "Visit recorded successfully",
                    "visit_count": *count,
                }))
                .into_response()
            }
            None => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "user_id is required"})),
            )
                .into_response(),
        }
    }

    async fn spawn_server(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/visits")
    }

    async fn fake_endpoint() -> String {
        let router = Router::new()
            .route("/visits", post(fake_function).options(fake_function))
            .with_state(Counts::default());
        spawn_server(router).await
    }

    #[tokio::test]
    async fn test_record_visit_counts_up() {
        let client = VisitClient::new(fake_endpoint().await);

        let first = client.record_visit("user_abc123xyz").await.unwrap();
        let second = client.record_visit("user_abc123xyz").await.unwrap();

        assert_eq!(first, RecordVisitResponse::recorded(1));
        assert_eq!(second.visit_count, 2);
    }

    #[tokio::test]
    async fn test_preflight() {
        let client = VisitClient::new(fake_endpoint().await);

        let ack = client.preflight().await.unwrap();

        assert_eq!(ack, AckResponse::default());
    }

    #[tokio::test]
    async fn test_error_envelope_becomes_server_error() {
        let client = VisitClient::new(fake_endpoint().await);

        let err = client.record_visit("").await.unwrap_err();

        match err {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "user_id is required");
            }
            other => panic!("expected ServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_keeps_raw_body() {
        let router = Router::new().route(
            "/visits",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
        );
        let client = VisitClient::new(spawn_server(router).await);

        let err = client.record_visit("user_abc123xyz").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Server returned 502: upstream unavailable"
        );
    }
}
