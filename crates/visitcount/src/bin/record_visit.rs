//! Lambda entry point for `POST /visits` and its pre-flight `OPTIONS`.
//!
//! The DynamoDB client is built once per execution environment and reused by
//! every warm invocation.

use std::sync::Arc;

use lambda_http::{run, service_fn, Error, Request};

use visitcount::{
    config::Config, lambda::function_handler, recorder::VisitRecorder,
    storage::DynamoDbVisitRepository, telemetry,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_lambda_subscriber();

    let config = Config::from_env()?;
    let repository = DynamoDbVisitRepository::from_config(&config).await?;
    tracing::info!(table = %repository.table_name(), ttl_days = ?config.visit_ttl_days, "Cold start");

    let recorder = VisitRecorder::new(Arc::new(repository));

    run(service_fn(|event: Request| function_handler(&recorder, event))).await
}
