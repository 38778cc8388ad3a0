//! Visit endpoint for the local server.
//!
//! Both `POST` and `OPTIONS` go through the same [`VisitRecorder`] the Lambda
//! function uses, so local responses match deployed ones byte for byte.
//!
//! [`VisitRecorder`]: crate::recorder::VisitRecorder

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use visitcount_core::http::ProxyResponse;

use crate::state::AppState;

/// POST|OPTIONS /visits
pub async fn record_visit(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    let response = state.recorder.handle(&method, &body).await;
    into_axum_response(response)
}

fn into_axum_response(response: ProxyResponse) -> Response {
    match response.into_http() {
        Ok(response) => response.map(Body::from).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to build response");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
