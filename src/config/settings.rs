use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub leetcode_api_url: String,
    pub codeforces_api_url: String,
    pub sync_timeout_secs: u64,
    /// How long a cached platform response stays fresh, in seconds
    pub sync_cache_ttl_secs: i64,
    pub default_goal_per_day: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            leetcode_api_url: "https://leetcode.com/graphql".to_string(),
            codeforces_api_url: "https://codeforces.com/api".to_string(),
            sync_timeout_secs: 30,
            sync_cache_ttl_secs: 600,
            default_goal_per_day: 2,
        }
    }
}

/// Platform-specific app data directory. Every store keeps its file here.
pub fn app_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support/com.algovista.desktop");
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push("com.algovista.desktop");
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share/com.algovista.desktop");
            return dir;
        }
    }

    // Fallback
    PathBuf::from("data")
}

fn get_config_path() -> PathBuf {
    app_data_dir().join("settings.toml")
}

fn load_config_internal() -> AppConfig {
    let config_path = get_config_path();

    if let Ok(content) = fs::read_to_string(&config_path) {
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                tracing::info!(path = ?config_path, "Loaded settings.toml");
                return config;
            }
            Err(e) => {
                tracing::warn!(path = ?config_path, error = %e, "Failed to parse settings.toml, using defaults");
            }
        }
    }

    AppConfig::default()
}

lazy_static! {
    static ref APP_CONFIG: AppConfig = load_config_internal();
}

/// Get the cached configuration (loaded once at startup)
pub fn get_config() -> &'static AppConfig {
    &APP_CONFIG
}
