use std::sync::Arc;

use chrono::Utc;
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use tauri::State;
use tokio::time::Duration;

use crate::activity::{self, DailyActivity};
use crate::analytics::{compute_analytics, AnalyticsPayload};
use crate::cache;
use crate::coach::{self, store as coach_store, CoachPlan};
use crate::config::settings::get_config;
use crate::error::VistaError;
use crate::platforms::codeforces::{self, CodeforcesProfile};
use crate::platforms::leetcode::{self, LeetCodeStats};
use crate::platforms::{retry_delay_ms, Platform};
use crate::problems::model::{Difficulty, Problem, Status};
use crate::problems::store as problems_store;
use crate::profile::{self, PlatformSnapshot, Profile};
use crate::recommend::{prompt, selector};
use crate::state::app::AppState;
use crate::streaks::compute_streaks;

const MAX_SYNC_ATTEMPTS: u32 = 3;

/// Tracker payload: the raw daily log plus the derived streaks
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerStats {
    pub daily_stats: Vec<DailyActivity>,
    pub current_streak: u32,
    pub max_streak: u32,
}

async fn tracker_stats_now() -> TrackerStats {
    let entries = activity::load_activity().await;
    let streaks = compute_streaks(&entries, Utc::now().date_naive());
    TrackerStats {
        daily_stats: entries,
        current_streak: streaks.current_streak,
        max_streak: streaks.max_streak,
    }
}

#[tauri::command]
pub async fn get_tracker_stats() -> Result<TrackerStats, String> {
    Ok(tracker_stats_now().await)
}

#[tauri::command]
pub async fn record_solve(
    state: State<'_, Arc<AppState>>,
    date: String,
    solved: Option<i64>,
) -> Result<TrackerStats, String> {
    let app_state = state.inner();

    let entry = match DailyActivity::from_raw(&date, solved.unwrap_or(1)) {
        Ok(entry) => entry,
        Err(e) => {
            app_state.metrics.record_validation_reject();
            return Err(format!("Invalid input: {}", e));
        }
    };

    activity::record_solve(entry.date, entry.solved)
        .await
        .map_err(|e| format!("Failed to record activity: {}", e))?;

    Ok(tracker_stats_now().await)
}

#[tauri::command]
pub async fn add_problem(
    title: String,
    link: String,
    topic: String,
    difficulty: Difficulty,
    status: Option<Status>,
) -> Result<Problem, String> {
    let problem = Problem::new(
        title,
        link,
        topic,
        difficulty,
        status.unwrap_or(Status::Unsolved),
    );
    problems_store::add_problem(problem)
        .await
        .map_err(|e| format!("Failed to add problem: {}", e))
}

#[tauri::command]
pub async fn update_problem_status(id: String, status: Status) -> Result<Problem, String> {
    problems_store::update_status(&id, status)
        .await
        .map_err(|e| format!("Failed to update problem: {}", e))
}

#[tauri::command]
pub async fn get_problems() -> Result<Vec<Problem>, String> {
    Ok(problems_store::load_problems().await)
}

#[tauri::command]
pub async fn get_problems_by_topic(topic: String) -> Result<Vec<Problem>, String> {
    let all_problems = problems_store::load_problems().await;
    Ok(problems_store::problems_by_topic(&all_problems, &topic))
}

#[tauri::command]
pub async fn get_recommendations(state: State<'_, Arc<AppState>>) -> Result<Vec<Problem>, String> {
    let app_state = state.inner();
    let problems = problems_store::load_problems().await;

    let picks = selector::recommend(&problems, &mut thread_rng());

    for pick in &picks {
        app_state.record_recommended(pick.id.clone());
    }
    app_state.metrics.record_recommendation_served();

    Ok(picks)
}

#[tauri::command]
pub fn recommend_from_prompt(prompt_text: String) -> Result<Vec<String>, String> {
    Ok(prompt::recommend_from_prompt(&prompt_text))
}

#[tauri::command]
pub async fn get_coach_plan(state: State<'_, Arc<AppState>>) -> Result<CoachPlan, String> {
    let app_state = state.inner();

    match coach_store::load().await {
        Ok(Some(plan)) if !plan.is_expired() => return Ok(plan),
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load coach plan, regenerating");
        }
    }

    regenerate_coach_plan(app_state).await
}

#[tauri::command]
pub async fn refresh_coach_plan(state: State<'_, Arc<AppState>>) -> Result<CoachPlan, String> {
    regenerate_coach_plan(state.inner()).await
}

async fn regenerate_coach_plan(app_state: &AppState) -> Result<CoachPlan, String> {
    let profile = profile::get_profile(app_state)
        .await
        .map_err(|e| format!("Failed to load profile: {}", e))?;
    let problems = problems_store::load_problems().await;

    let plan = coach::generate_coach_plan(&problems, profile.goal_per_day);
    if let Err(e) = coach_store::save(&plan).await {
        tracing::warn!(error = %e, "Failed to save coach plan");
    }
    Ok(plan)
}

#[tauri::command]
pub async fn get_analytics_data() -> Result<AnalyticsPayload, String> {
    let problems = problems_store::load_problems().await;
    let entries = activity::load_activity().await;
    Ok(compute_analytics(&problems, &entries, Utc::now().date_naive()))
}

#[tauri::command]
pub async fn get_profile(state: State<'_, Arc<AppState>>) -> Result<Profile, String> {
    profile::get_profile(state.inner())
        .await
        .map_err(|e| format!("Failed to load profile: {}", e))
}

#[tauri::command]
pub async fn update_handles(
    state: State<'_, Arc<AppState>>,
    leetcode_handle: String,
    codeforces_handle: String,
) -> Result<Profile, String> {
    profile::update_profile(state.inner(), |p| {
        p.leetcode_handle = leetcode_handle;
        p.codeforces_handle = codeforces_handle;
    })
    .await
    .map_err(|e| format!("Failed to update handles: {}", e))
}

#[tauri::command]
pub async fn update_daily_goal(
    state: State<'_, Arc<AppState>>,
    goal_per_day: u32,
) -> Result<Profile, String> {
    profile::update_profile(state.inner(), |p| {
        p.goal_per_day = goal_per_day;
    })
    .await
    .map_err(|e| format!("Failed to update daily goal: {}", e))
}

async fn fetch_leetcode_with_retry(
    app_state: &AppState,
    handle: &str,
) -> Result<Option<LeetCodeStats>, VistaError> {
    let ttl = get_config().sync_cache_ttl_secs;
    if let Some(stats) = cache::get_cached::<LeetCodeStats>(app_state, Platform::LeetCode, handle, ttl)
    {
        app_state.metrics.record_cache_hit();
        return Ok(Some(stats));
    }
    app_state.metrics.record_cache_miss();

    if app_state.platform_health.is_cooling_down(Platform::LeetCode) {
        return Err(
            VistaError::new("Platform in failure cooldown, skipping fetch", "sync")
                .with_platform("leetcode"),
        );
    }

    let mut last_err: Option<anyhow::Error> = None;
    for attempt in 0..MAX_SYNC_ATTEMPTS {
        if attempt > 0 {
            tokio::time::sleep(Duration::from_millis(retry_delay_ms(attempt - 1))).await;
        }
        match leetcode::fetch_leetcode_stats(handle).await {
            Ok(stats) => {
                app_state.platform_health.record_success(Platform::LeetCode);
                if let Some(ref stats) = stats {
                    cache::cache_response(app_state, Platform::LeetCode, handle, stats)?;
                }
                return Ok(stats);
            }
            Err(e) => {
                app_state.platform_health.record_failure(Platform::LeetCode);
                tracing::warn!(
                    platform = "leetcode",
                    handle = handle,
                    attempt = attempt,
                    error = %e,
                    "Fetch attempt failed"
                );
                last_err = Some(e);
            }
        }
    }

    Err(VistaError::new(
        last_err
            .map(|e| format!("{:#}", e))
            .unwrap_or_else(|| "All fetch attempts failed".to_string()),
        "sync",
    )
    .with_platform("leetcode"))
}

async fn fetch_codeforces_with_retry(
    app_state: &AppState,
    handle: &str,
) -> Result<CodeforcesProfile, VistaError> {
    let ttl = get_config().sync_cache_ttl_secs;
    if let Some(profile) =
        cache::get_cached::<CodeforcesProfile>(app_state, Platform::Codeforces, handle, ttl)
    {
        app_state.metrics.record_cache_hit();
        return Ok(profile);
    }
    app_state.metrics.record_cache_miss();

    if app_state.platform_health.is_cooling_down(Platform::Codeforces) {
        return Err(
            VistaError::new("Platform in failure cooldown, skipping fetch", "sync")
                .with_platform("codeforces"),
        );
    }

    let mut last_err: Option<anyhow::Error> = None;
    for attempt in 0..MAX_SYNC_ATTEMPTS {
        if attempt > 0 {
            tokio::time::sleep(Duration::from_millis(retry_delay_ms(attempt - 1))).await;
        }
        match codeforces::fetch_codeforces_stats(handle).await {
            Ok(stats) => {
                app_state
                    .platform_health
                    .record_success(Platform::Codeforces);
                cache::cache_response(app_state, Platform::Codeforces, handle, &stats.profile)?;
                return Ok(stats.profile);
            }
            Err(e) => {
                app_state
                    .platform_health
                    .record_failure(Platform::Codeforces);
                tracing::warn!(
                    platform = "codeforces",
                    handle = handle,
                    attempt = attempt,
                    error = %e,
                    "Fetch attempt failed"
                );
                last_err = Some(e);
            }
        }
    }

    Err(VistaError::new(
        last_err
            .map(|e| format!("{:#}", e))
            .unwrap_or_else(|| "All fetch attempts failed".to_string()),
        "sync",
    )
    .with_platform("codeforces"))
}

#[tauri::command]
pub async fn sync_platform_stats(
    state: State<'_, Arc<AppState>>,
) -> Result<PlatformSnapshot, String> {
    let app_state = state.inner();
    let current = profile::get_profile(app_state)
        .await
        .map_err(|e| format!("Failed to load profile: {}", e))?;

    let mut leetcode_stats = current.handles.leetcode.clone();
    let mut codeforces_stats = current.handles.codeforces.clone();
    let mut any_failed = false;

    let mut leetcode_ok = true;
    if !current.leetcode_handle.is_empty() {
        match fetch_leetcode_with_retry(app_state, &current.leetcode_handle).await {
            Ok(Some(stats)) => leetcode_stats = Some(stats),
            Ok(None) => {
                tracing::warn!(
                    handle = %current.leetcode_handle,
                    "LeetCode user not found, keeping previous stats"
                );
                leetcode_ok = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "LeetCode sync failed");
                leetcode_ok = false;
                any_failed = true;
            }
        }
    }

    let mut codeforces_ok = true;
    if !current.codeforces_handle.is_empty() {
        match fetch_codeforces_with_retry(app_state, &current.codeforces_handle).await {
            Ok(profile) => codeforces_stats = Some(profile),
            Err(e) => {
                tracing::warn!(error = %e, "Codeforces sync failed");
                codeforces_ok = false;
                any_failed = true;
            }
        }
    }

    if any_failed {
        app_state.metrics.record_sync_failure();
    } else {
        app_state.metrics.record_sync_success();
    }
    crate::logging::log_sync_result(leetcode_ok, codeforces_ok);

    let updated = profile::update_profile(app_state, move |p| {
        p.handles = PlatformSnapshot {
            leetcode: leetcode_stats,
            codeforces: codeforces_stats,
            last_synced: Some(Utc::now().timestamp()),
        };
    })
    .await
    .map_err(|e| format!("Failed to save synced stats: {}", e))?;

    Ok(updated.handles)
}

#[tauri::command]
pub fn open_problem_link(app: tauri::AppHandle, url: String) -> Result<(), String> {
    use tauri_plugin_opener::OpenerExt;
    app.opener()
        .open_url(url, None::<String>)
        .map_err(|e| format!("Failed to open link: {}", e))
}

#[tauri::command]
pub async fn reset_all_progress(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    let app_state = state.inner();

    activity::clear_activity()
        .await
        .map_err(|e| format!("Failed to clear activity: {}", e))?;
    problems_store::clear_problems()
        .await
        .map_err(|e| format!("Failed to clear problems: {}", e))?;

    let plan_path = coach_store::get_plan_path();
    if plan_path.exists() {
        let _ = tokio::fs::remove_file(&plan_path).await;
    }

    let fresh = Profile::new();
    profile::store::save_profile(&fresh)
        .await
        .map_err(|e| format!("Failed to reset profile: {}", e))?;
    app_state.set_profile(fresh);

    app_state.recently_recommended.write().clear();
    app_state.sync_cache.write().clear();

    Ok(())
}
