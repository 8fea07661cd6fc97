use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::VistaError;
use crate::platforms::Platform;
use crate::state::app::AppState;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CachedResponse {
    pub data: String,
    pub timestamp: i64,
}

/// Generate a hash key from platform and handle
fn cache_key(platform: Platform, handle: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    platform.as_str().hash(&mut hasher);
    handle.hash(&mut hasher);
    hasher.finish()
}

/// Return a cached platform response if one exists and is still fresh
pub fn get_cached<T: for<'de> Deserialize<'de>>(
    state: &AppState,
    platform: Platform,
    handle: &str,
    max_age_secs: i64,
) -> Option<T> {
    let key = cache_key(platform, handle);
    let cache = state.sync_cache.read();

    if let Some(cached) = cache.peek(&key) {
        let age = chrono::Utc::now().timestamp() - cached.timestamp;
        if age <= max_age_secs {
            tracing::debug!(
                platform = platform.as_str(),
                handle = handle,
                age_secs = age,
                "Sync cache hit"
            );
            match serde_json::from_str::<T>(&cached.data) {
                Ok(parsed) => return Some(parsed),
                Err(e) => {
                    tracing::warn!(
                        platform = platform.as_str(),
                        error = %e,
                        "Failed to parse cached response"
                    );
                }
            }
        }
    }

    tracing::debug!(
        platform = platform.as_str(),
        handle = handle,
        "Sync cache miss"
    );
    None
}

/// Store a platform response in the cache
pub fn cache_response<T: Serialize>(
    state: &AppState,
    platform: Platform,
    handle: &str,
    response: &T,
) -> Result<(), VistaError> {
    let key = cache_key(platform, handle);
    let data = serde_json::to_string(response).map_err(|e| {
        VistaError::new(
            format!("Failed to serialize response for cache: {}", e),
            "json_serialize",
        )
        .with_platform(platform.as_str())
    })?;

    let cached = CachedResponse {
        data,
        timestamp: chrono::Utc::now().timestamp(),
    };

    let mut cache = state.sync_cache.write();
    cache.put(key, cached);
    Ok(())
}
