use std::path::PathBuf;

use crate::coach::CoachPlan;
use crate::config::settings::app_data_dir;
use crate::error::VistaError;

pub fn get_plan_path() -> PathBuf {
    app_data_dir().join("coach_plan.json")
}

/// Save the coach plan
pub async fn save(plan: &CoachPlan) -> Result<(), VistaError> {
    let path = get_plan_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            VistaError::new(format!("Failed to create directory: {}", e), "io")
                .with_context(format!("path: {:?}", parent))
        })?;
    }

    let json = serde_json::to_string_pretty(plan).map_err(|e| {
        VistaError::new(format!("Failed to serialize plan: {}", e), "json_serialize")
    })?;

    tokio::fs::write(&path, json).await.map_err(|e| {
        VistaError::new(format!("Failed to write coach_plan.json: {}", e), "io")
            .with_context(format!("path: {:?}", path))
    })?;

    Ok(())
}

/// Load the coach plan, None if it has never been generated
pub async fn load() -> Result<Option<CoachPlan>, VistaError> {
    let path = get_plan_path();
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => serde_json::from_str(&content)
            .map_err(|e| {
                VistaError::new(format!("Failed to parse coach_plan.json: {}", e), "json_parse")
                    .with_context(format!("path: {:?}", path))
            })
            .map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(VistaError::new(
            format!("Failed to read coach_plan.json: {}", e),
            "io",
        )
        .with_context(format!("path: {:?}", path))),
    }
}
