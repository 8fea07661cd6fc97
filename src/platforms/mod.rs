pub mod codeforces;
pub mod leetcode;

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Instant;

use parking_lot::Mutex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::config::settings::get_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    LeetCode,
    Codeforces,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LeetCode => "leetcode",
            Platform::Codeforces => "codeforces",
        }
    }
}

/// Reusable HTTP client singleton (created once, reused for all requests)
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

pub(crate) fn get_http_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(get_config().sync_timeout_secs))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .build()
            .expect("Failed to create HTTP client")
    })
}

const FAILURE_THRESHOLD: u32 = 3;
const COOLDOWN_SECS: u64 = 300;

struct FailureState {
    consecutive: u32,
    last_failure: Instant,
}

/// Per-platform availability tracking. After three consecutive failures a
/// platform is skipped until the cooldown passes, so a dead API does not
/// stall every sync attempt.
#[derive(Default)]
pub struct PlatformHealth {
    failures: Mutex<HashMap<Platform, FailureState>>,
}

impl PlatformHealth {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the platform is in its failure cooldown window
    pub fn is_cooling_down(&self, platform: Platform) -> bool {
        let failures = self.failures.lock();
        match failures.get(&platform) {
            Some(state) => {
                state.consecutive >= FAILURE_THRESHOLD
                    && state.last_failure.elapsed().as_secs() < COOLDOWN_SECS
            }
            None => false,
        }
    }

    pub fn record_success(&self, platform: Platform) {
        self.failures.lock().remove(&platform);
    }

    pub fn record_failure(&self, platform: Platform) {
        let mut failures = self.failures.lock();
        let state = failures.entry(platform).or_insert(FailureState {
            consecutive: 0,
            last_failure: Instant::now(),
        });
        state.consecutive += 1;
        state.last_failure = Instant::now();

        if state.consecutive >= FAILURE_THRESHOLD {
            tracing::warn!(
                platform = platform.as_str(),
                consecutive = state.consecutive,
                cooldown_secs = COOLDOWN_SECS,
                "Platform entering failure cooldown"
            );
        }
    }

    pub fn failure_count(&self, platform: Platform) -> u32 {
        self.failures
            .lock()
            .get(&platform)
            .map(|s| s.consecutive)
            .unwrap_or(0)
    }
}

const RETRY_BASE_MS: u64 = 500;
const RETRY_MAX_MS: u64 = 4000;

/// Delay before retry `attempt` (0-indexed), doubling up to the cap
pub fn retry_delay_ms(attempt: u32) -> u64 {
    RETRY_BASE_MS
        .saturating_mul(2u64.saturating_pow(attempt))
        .min(RETRY_MAX_MS)
}
