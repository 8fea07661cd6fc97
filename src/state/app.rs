use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::RwLock;

use crate::cache::CachedResponse;
use crate::metrics::Metrics;
use crate::platforms::PlatformHealth;
use crate::profile::Profile;

/// How many recently recommended problem ids to remember
const RECENT_RECOMMENDATIONS: usize = 8;

/// Application-wide state container.
/// All mutable state is centralized here and passed explicitly to functions.
#[derive(Clone)]
pub struct AppState {
    /// In-memory profile cache, backed by profile.json
    pub profile: Arc<RwLock<Option<Profile>>>,
    /// Platform response cache (LRU with bounded size)
    pub sync_cache: Arc<RwLock<LruCache<u64, CachedResponse>>>,
    /// Per-platform failure tracking for the sync pipeline
    pub platform_health: Arc<PlatformHealth>,
    /// Recently recommended problem ids (to avoid immediate repeats)
    pub recently_recommended: Arc<RwLock<VecDeque<String>>>,
    /// Counter metrics
    pub metrics: Metrics,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            profile: Arc::new(RwLock::new(None)),
            sync_cache: Arc::new(RwLock::new(LruCache::new(
                NonZeroUsize::new(32).expect("32 > 0"),
            ))),
            platform_health: Arc::new(PlatformHealth::new()),
            recently_recommended: Arc::new(RwLock::new(VecDeque::with_capacity(
                RECENT_RECOMMENDATIONS,
            ))),
            metrics: Metrics::new(),
        }
    }

    /// Set the cached profile (after loading from disk or mutating)
    pub fn set_profile(&self, profile: Profile) {
        *self.profile.write() = Some(profile);
    }

    /// Drop the cached profile so the next read hits the disk store
    pub fn invalidate_profile(&self) {
        *self.profile.write() = None;
    }

    /// Record that a problem was just recommended
    pub fn record_recommended(&self, problem_id: String) {
        let mut recent = self.recently_recommended.write();
        recent.retain(|id| id != &problem_id);
        recent.push_front(problem_id);
        if recent.len() > RECENT_RECOMMENDATIONS {
            recent.pop_back();
        }
    }

    /// Get recently recommended problem ids
    pub fn get_recently_recommended(&self) -> Vec<String> {
        self.recently_recommended.read().iter().cloned().collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
