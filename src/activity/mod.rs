use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::settings::app_data_dir;
use crate::error::{ValidationError, VistaError};

/// One day of recorded practice. At most one entry per calendar date;
/// days without an entry count as zero activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub solved: u32,
}

impl DailyActivity {
    /// Validate raw caller input into the typed model. Malformed dates and
    /// negative counts are rejected here so the aggregation functions only
    /// ever see well-formed entries.
    pub fn from_raw(date: &str, solved: i64) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ValidationError::MalformedDate(date.to_string()))?;
        if solved < 0 {
            return Err(ValidationError::NegativeCount(solved));
        }
        Ok(DailyActivity {
            date,
            solved: solved as u32,
        })
    }
}

fn activity_path() -> PathBuf {
    app_data_dir().join("activity.json")
}

/// Load the full activity log, sorted ascending by date
pub async fn load_activity() -> Vec<DailyActivity> {
    let path = activity_path();
    let mut entries = match tokio::fs::read_to_string(&path).await {
        Ok(data) => match serde_json::from_str::<Vec<DailyActivity>>(&data) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = ?path,
                    error = %e,
                    "Failed to parse activity.json, starting empty"
                );
                Vec::new()
            }
        },
        Err(e) => {
            tracing::debug!(
                path = ?path,
                error = %e,
                "Failed to read activity.json, starting empty"
            );
            Vec::new()
        }
    };

    entries.sort_by_key(|e| e.date);
    entries
}

/// Save the full activity log
pub async fn save_activity(entries: &[DailyActivity]) -> Result<(), VistaError> {
    let path = activity_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            VistaError::new(format!("Failed to create directory: {}", e), "io")
                .with_context(format!("path: {:?}", parent))
        })?;
    }

    let json = serde_json::to_string_pretty(entries).map_err(|e| {
        VistaError::new(format!("Failed to serialize activity: {}", e), "json_serialize")
    })?;

    tokio::fs::write(&path, json).await.map_err(|e| {
        VistaError::new(format!("Failed to write activity.json: {}", e), "io")
            .with_context(format!("path: {:?}", path))
    })?;

    Ok(())
}

/// Add solves to a day's entry, creating it if absent. Returns the updated,
/// sorted log. The per-date uniqueness invariant is enforced here.
pub async fn record_solve(date: NaiveDate, solved: u32) -> Result<Vec<DailyActivity>, VistaError> {
    let mut entries = load_activity().await;

    match entries.iter_mut().find(|e| e.date == date) {
        Some(entry) => entry.solved += solved,
        None => entries.push(DailyActivity { date, solved }),
    }

    entries.sort_by_key(|e| e.date);
    save_activity(&entries).await?;
    Ok(entries)
}

/// Delete the activity log file (used by the full progress reset)
pub async fn clear_activity() -> Result<(), VistaError> {
    let path = activity_path();
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(VistaError::new(
            format!("Failed to remove activity.json: {}", e),
            "io",
        )
        .with_context(format!("path: {:?}", path))),
    }
}
