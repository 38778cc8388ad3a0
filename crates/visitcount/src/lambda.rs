//! AWS Lambda adapter.
//!
//! Translates between `lambda_http` requests/responses and the
//! [`VisitRecorder`]. The runtime turns the returned response into the
//! `{statusCode, headers, body}` proxy envelope.

use lambda_http::{Body, Error, Request, Response};
use visitcount_core::http::ProxyResponse;

use crate::recorder::VisitRecorder;

/// Handles one Lambda invocation.
pub async fn function_handler(
    recorder: &VisitRecorder,
    event: Request,
) -> Result<Response<Body>, Error> {
    let body: &[u8] = event.body();
    let response = recorder.handle(event.method(), body).await;
    into_lambda_response(response)
}

/// Converts a [`ProxyResponse`] into a `lambda_http` response.
pub fn into_lambda_response(response: ProxyResponse) -> Result<Response<Body>, Error> {
    Ok(response.into_http()?.map(Body::Text))
}
