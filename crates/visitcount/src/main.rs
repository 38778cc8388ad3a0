use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};

use visitcount::{
    app::create_app, config::Config, state::AppState, storage::InMemoryVisitRepository,
    telemetry,
};
use visitcount_core::storage::VisitRepository;

/// Where visit counters are kept.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Storage {
    /// Process-local counters, lost on restart
    #[default]
    Memory,
    /// The table named by DYNAMODB_TABLE
    Dynamodb,
}

/// VisitCount - Per-user daily visit counter
#[derive(Parser, Debug)]
#[command(name = "visitcount")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend for visit counters
    #[arg(long, value_enum, default_value_t = Storage::Memory, env = "VISITCOUNT_STORAGE")]
    storage: Storage,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_server_subscriber();

    let config = Config::from_env()?;
    let repository = build_repository(cli.storage, &config).await?;
    let state = AppState::new(repository);

    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!(storage = ?cli.storage, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_repository(storage: Storage, config: &Config) -> Result<Arc<dyn VisitRepository>> {
    match storage {
        Storage::Memory => Ok(Arc::new(InMemoryVisitRepository::new())),
        #[cfg(feature = "dynamodb")]
        Storage::Dynamodb => {
            let repository =
                visitcount::storage::DynamoDbVisitRepository::from_config(config).await?;
            tracing::info!(table = %repository.table_name(), "Using DynamoDB storage");
            Ok(Arc::new(repository))
        }
        #[cfg(not(feature = "dynamodb"))]
        Storage::Dynamodb => {
            let _ = config;
            anyhow::bail!("built without the `dynamodb` feature")
        }
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
