//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_ENDPOINT;

/// CLI client for the visitcount endpoint.
#[derive(Debug, Parser)]
#[command(name = "visitcount-client")]
#[command(about = "CLI client for the visitcount endpoint", long_about = None)]
pub struct Cli {
    /// Visit endpoint URL.
    #[arg(long, env = "VISITCOUNT_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a visit for this visitor.
    Record {
        /// Visitor id to send instead of the stored one.
        #[arg(long)]
        user_id: Option<String>,

        /// File holding the stored visitor id.
        #[arg(long, env = "VISITCOUNT_ID_FILE", default_value = ".visitcount_user_id")]
        id_file: PathBuf,
    },
    /// Send the cross-origin pre-flight probe.
    Preflight,
}
