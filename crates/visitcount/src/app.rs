use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{health::livez, visits::record_visit},
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Cross-origin headers are produced by the recorder itself, so no CORS layer
/// is installed here.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/visits", post(record_visit).options(record_visit))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn send(app: Router, method: &str, body: &'static str) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri("/visits")
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_record_visit_twice() {
        let app = create_app(AppState::default());

        let response = send(app.clone(), "POST", r#"{"user_id": "alice"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"message": "Visit recorded successfully", "visit_count": 1})
        );

        let response = send(app, "POST", r#"{"user_id": "alice"}"#).await;
        assert_eq!(json_body(response).await["visit_count"], 2);
    }

    #[tokio::test]
    async fn test_preflight() {
        let app = create_app(AppState::default());

        let response = send(app, "OPTIONS", "").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
        assert_eq!(
            response.headers()["access-control-allow-methods"],
            "OPTIONS,POST"
        );
        assert_eq!(json_body(response).await, serde_json::json!({"message": "OK"}));
    }

    #[tokio::test]
    async fn test_missing_user_id() {
        let app = create_app(AppState::default());

        let response = send(app, "POST", "{}").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["access-control-allow-headers"],
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token"
        );
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "user_id is required"})
        );
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let app = create_app(AppState::default());

        let response = send(app, "POST", "not json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "Invalid JSON in request body"})
        );
    }

    #[tokio::test]
    async fn test_unrouted_method() {
        let app = create_app(AppState::default());

        let response = send(app, "GET", "").await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
