//! visitcount - per-user daily visit counter.
//!
//! The [`recorder::VisitRecorder`] owns the request flow. It is driven either
//! by the AWS Lambda adapter in [`lambda`] or by the axum router in [`app`]
//! for local development, and writes through a
//! [`visitcount_core::storage::VisitRepository`] backend from [`storage`].

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod lambda;
pub mod recorder;
pub mod state;
pub mod storage;
pub mod telemetry;
