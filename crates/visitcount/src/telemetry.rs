//! Tracing subscriber setup for the two binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Human-readable logs for the local development server.
pub fn init_server_subscriber() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "visitcount=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// One JSON object per line for CloudWatch, which adds its own timestamps.
pub fn init_lambda_subscriber() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "visitcount=info".into()),
        )
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();
}
