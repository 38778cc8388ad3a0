//! The visit recording flow: validate, increment, respond.
//!
//! [`VisitRecorder::handle`] is the single entry point used by every front
//! end. It never fails: each error is turned into a JSON error envelope
//! carrying the cross-origin headers.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use http::Method;

use visitcount_core::http::{is_preflight, ProxyResponse};
use visitcount_core::storage::VisitRepository;
use visitcount_core::visit::{
    visit_date_for, Clock, RecordError, RecordVisitRequest, SystemClock, VisitKey, VisitRecord,
};

/// Records visits against a [`VisitRepository`].
#[derive(Clone)]
pub struct VisitRecorder {
    repository: Arc<dyn VisitRepository>,
    clock: Arc<dyn Clock>,
}

impl VisitRecorder {
    /// Creates a recorder using the wall clock.
    pub fn new(repository: Arc<dyn VisitRepository>) -> Self {
        Self {
            repository,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used to pick the visit date.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Handles one inbound request and produces the full response.
    pub async fn handle(&self, method: &Method, body: &[u8]) -> ProxyResponse {
        if is_preflight(method) {
            tracing::debug!("Answering pre-flight request");
            return ProxyResponse::preflight();
        }

        match self.record(body).await {
            Ok(record) => {
                tracing::info!(
                    user_id = %record.user_id,
                    visit_date = %record.visit_date,
                    visit_count = record.visit_count,
                    "Visit recorded"
                );
                ProxyResponse::recorded(record.visit_count)
            }
            Err(err) => {
                match &err {
                    RecordError::Validation(_) => {
                        tracing::warn!(error = %err, "Rejected visit submission")
                    }
                    RecordError::Store(source) => {
                        tracing::error!(error = %source, "Failed to update visit counter")
                    }
                    RecordError::Unexpected(_) => {
                        tracing::error!(error = %err, "Unexpected failure while recording visit")
                    }
                }
                ProxyResponse::error(&err)
            }
        }
    }

    /// Parses `body` and performs the atomic increment for today's key.
    pub async fn record(&self, body: &[u8]) -> Result<VisitRecord, RecordError> {
        let request = RecordVisitRequest::parse(body)?;
        let key = VisitKey::new(visit_date_for(self.clock.now()), request.user_id);

        let visit_count = AssertUnwindSafe(self.repository.increment_visit(&key))
            .catch_unwind()
            .await
            .map_err(|panic| RecordError::Unexpected(panic_message(panic.as_ref())))??;

        Ok(VisitRecord::new(key, visit_count))
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unexpected panic while recording visit".to_string()
    }
}
