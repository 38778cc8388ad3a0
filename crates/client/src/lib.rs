//! visitcount_client - CLI client for the visitcount endpoint.

pub mod cli;
pub mod client;
pub mod error;
pub mod identity;
pub mod output;

pub use client::VisitClient;
pub use error::{ClientError, Result};
