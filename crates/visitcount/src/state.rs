//! Shared application state for the local server.

use std::sync::Arc;

use visitcount_core::storage::VisitRepository;

use crate::recorder::VisitRecorder;
use crate::storage::InMemoryVisitRepository;

/// Cloned into every axum handler.
#[derive(Clone)]
pub struct AppState {
    pub recorder: Arc<VisitRecorder>,
}

impl AppState {
    /// Creates state recording into the given repository.
    pub fn new(repository: Arc<dyn VisitRepository>) -> Self {
        Self::with_recorder(VisitRecorder::new(repository))
    }

    /// Creates state around a pre-built recorder.
    pub fn with_recorder(recorder: VisitRecorder) -> Self {
        Self {
            recorder: Arc::new(recorder),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryVisitRepository::new()))
    }
}
