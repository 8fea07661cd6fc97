use std::path::PathBuf;

use crate::config::settings::app_data_dir;
use crate::error::VistaError;
use crate::profile::Profile;

fn profile_path() -> PathBuf {
    app_data_dir().join("profile.json")
}

/// Load the profile from disk, defaulting when absent or unparseable
pub async fn load_profile() -> Profile {
    let path = profile_path();
    match tokio::fs::read_to_string(&path).await {
        Ok(data) => match serde_json::from_str::<Profile>(&data) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(
                    path = ?path,
                    error = %e,
                    "Failed to parse profile.json, using defaults"
                );
                Profile::new()
            }
        },
        Err(e) => {
            tracing::debug!(
                path = ?path,
                error = %e,
                "Failed to read profile.json, using defaults"
            );
            Profile::new()
        }
    }
}

/// Save the profile to disk
pub async fn save_profile(profile: &Profile) -> Result<(), VistaError> {
    let path = profile_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            VistaError::new(format!("Failed to create directory: {}", e), "io")
                .with_context(format!("path: {:?}", parent))
        })?;
    }

    let json = serde_json::to_string_pretty(profile).map_err(|e| {
        VistaError::new(format!("Failed to serialize profile: {}", e), "json_serialize")
    })?;

    tokio::fs::write(&path, json).await.map_err(|e| {
        VistaError::new(format!("Failed to write profile.json: {}", e), "io")
            .with_context(format!("path: {:?}", path))
    })?;

    Ok(())
}
