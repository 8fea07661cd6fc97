pub mod store;

use serde::{Deserialize, Serialize};

use crate::config::settings::get_config;
use crate::error::VistaError;
use crate::platforms::codeforces::CodeforcesProfile;
use crate::platforms::leetcode::LeetCodeStats;
use crate::state::app::AppState;

/// Last synced stats from the external platforms
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformSnapshot {
    pub leetcode: Option<LeetCodeStats>,
    pub codeforces: Option<CodeforcesProfile>,
    pub last_synced: Option<i64>,
}

impl PlatformSnapshot {
    /// Combined solved count across platforms, the number the dashboard
    /// headlines. Codeforces already counts distinct accepted problems.
    pub fn total_solved(&self) -> u32 {
        let leetcode = self.leetcode.as_ref().map(|s| s.total_solved).unwrap_or(0);
        let codeforces = self.codeforces.as_ref().map(|s| s.solved_count).unwrap_or(0);
        leetcode + codeforces
    }
}

/// The single local user: external handles, daily goal, synced stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub leetcode_handle: String,
    pub codeforces_handle: String,
    pub goal_per_day: u32,
    pub handles: PlatformSnapshot,
}

impl Profile {
    pub fn new() -> Self {
        Profile {
            username: String::new(),
            leetcode_handle: String::new(),
            codeforces_handle: String::new(),
            goal_per_day: get_config().default_goal_per_day,
            handles: PlatformSnapshot::default(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the profile from AppState, loading from disk if not cached
pub async fn get_profile(state: &AppState) -> Result<Profile, VistaError> {
    {
        let guard = state.profile.read();
        if let Some(profile) = guard.as_ref() {
            return Ok(profile.clone());
        }
    }

    let profile = store::load_profile().await;
    state.set_profile(profile.clone());
    Ok(profile)
}

/// Update the profile in AppState and persist to disk
pub async fn update_profile<F>(state: &AppState, f: F) -> Result<Profile, VistaError>
where
    F: FnOnce(&mut Profile),
{
    let mut profile = get_profile(state).await?;
    f(&mut profile);
    state.set_profile(profile.clone());
    store::save_profile(&profile).await?;
    Ok(profile)
}
