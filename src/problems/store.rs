use std::path::PathBuf;

use crate::config::settings::app_data_dir;
use crate::error::VistaError;
use crate::problems::model::{Problem, Status};

fn problems_path() -> PathBuf {
    app_data_dir().join("problems.json")
}

/// Load all tracked problems
pub async fn load_problems() -> Vec<Problem> {
    let path = problems_path();
    match tokio::fs::read_to_string(&path).await {
        Ok(data) => match serde_json::from_str::<Vec<Problem>>(&data) {
            Ok(problems) => problems,
            Err(e) => {
                tracing::warn!(
                    path = ?path,
                    error = %e,
                    "Failed to parse problems.json, starting empty"
                );
                Vec::new()
            }
        },
        Err(e) => {
            tracing::debug!(
                path = ?path,
                error = %e,
                "Failed to read problems.json, starting empty"
            );
            Vec::new()
        }
    }
}

/// Save all tracked problems
pub async fn save_problems(problems: &[Problem]) -> Result<(), VistaError> {
    let path = problems_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            VistaError::new(format!("Failed to create directory: {}", e), "io")
                .with_context(format!("path: {:?}", parent))
        })?;
    }

    let json = serde_json::to_string_pretty(problems).map_err(|e| {
        VistaError::new(format!("Failed to serialize problems: {}", e), "json_serialize")
    })?;

    tokio::fs::write(&path, json).await.map_err(|e| {
        VistaError::new(format!("Failed to write problems.json: {}", e), "io")
            .with_context(format!("path: {:?}", path))
    })?;

    Ok(())
}

/// Add a problem. Re-adding the same title+link replaces the old record
/// instead of duplicating it.
pub async fn add_problem(problem: Problem) -> Result<Problem, VistaError> {
    let mut problems = load_problems().await;
    problems.retain(|p| p.id != problem.id);
    problems.push(problem.clone());
    save_problems(&problems).await?;
    Ok(problem)
}

/// Update one problem's status
pub async fn update_status(id: &str, status: Status) -> Result<Problem, VistaError> {
    let mut problems = load_problems().await;

    let problem = problems
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| {
            VistaError::new("Problem not found", "problems").with_context(format!("id: {}", id))
        })?;
    problem.status = status;
    let updated = problem.clone();

    save_problems(&problems).await?;
    Ok(updated)
}

/// Filter by exact topic match (trimmed, case-sensitive)
pub fn problems_by_topic(problems: &[Problem], topic: &str) -> Vec<Problem> {
    let expected = topic.trim();
    let filtered: Vec<Problem> = problems
        .iter()
        .filter(|p| p.topic.trim() == expected)
        .cloned()
        .collect();

    if filtered.is_empty() && !problems.is_empty() {
        let available_topics: Vec<_> = problems
            .iter()
            .map(|p| p.topic.as_str())
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();
        tracing::debug!(
            topic = %topic,
            available_topics = ?available_topics,
            "No problems found for topic"
        );
    }

    filtered
}

/// Delete the problems file (used by the full progress reset)
pub async fn clear_problems() -> Result<(), VistaError> {
    let path = problems_path();
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(VistaError::new(
            format!("Failed to remove problems.json: {}", e),
            "io",
        )
        .with_context(format!("path: {:?}", path))),
    }
}
