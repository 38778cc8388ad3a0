use async_trait::async_trait;

use crate::visit::VisitKey;

use super::Result;

/// Storage for daily visit counters.
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Atomically adds one to the counter for `key`, creating it at 1 when it
    /// does not exist yet, and returns the post-increment value.
    async fn increment_visit(&self, key: &VisitKey) -> Result<u64>;
}
