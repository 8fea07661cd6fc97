use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counter-style metrics for observability.
/// All metrics are atomic for thread-safety.
#[derive(Clone, Default)]
pub struct Metrics {
    /// Successful platform sync passes
    pub sync_success_count: Arc<AtomicU64>,
    /// Failed platform sync passes
    pub sync_failure_count: Arc<AtomicU64>,
    /// Sync-cache hit count
    pub cache_hit_count: Arc<AtomicU64>,
    /// Sync-cache miss count
    pub cache_miss_count: Arc<AtomicU64>,
    /// Recommendation sets served
    pub recommendations_served: Arc<AtomicU64>,
    /// Inputs rejected at the validation boundary
    pub validation_rejects: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_sync_success(&self) {
        self.sync_success_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sync_failure(&self) {
        self.sync_failure_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hit_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_miss_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_recommendation_served(&self) {
        self.recommendations_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_reject(&self) {
        self.validation_rejects.fetch_add(1, Ordering::Relaxed);
    }
}
