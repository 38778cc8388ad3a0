//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use visitcount_core::storage::{Result, VisitRepository};
use visitcount_core::visit::VisitKey;

/// In-memory storage backend for testing and local development.
///
/// Counters live in a `HashMap` behind an `Arc<RwLock<_>>`; the write lock is
/// held for the whole read-add-store step, so increments are atomic.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVisitRepository {
    counters: Arc<RwLock<HashMap<VisitKey, u64>>>,
}

impl InMemoryVisitRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a counter, if it has ever been incremented.
    pub async fn visit_count(&self, key: &VisitKey) -> Option<u64> {
        self.counters.read().await.get(key).copied()
    }

    /// Sum of all counters, i.e. the number of writes performed so far.
    pub async fn total_visits(&self) -> u64 {
        self.counters.read().await.values().sum()
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn increment_visit(&self, key: &VisitKey) -> Result<u64> {
        let mut counters = self.counters.write().await;
        let count = counters.entry(key.clone()).or_insert(0);
        *count += 1;
        Ok(*count)
    }
}
