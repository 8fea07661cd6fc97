pub mod activity;
pub mod analytics;
pub mod cache;
pub mod coach;
pub mod config;
pub mod error;
mod logging;
pub mod metrics;
pub mod platforms;
pub mod problems;
pub mod profile;
pub mod recommend;
mod routes;
pub mod state;
pub mod streaks;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize structured logging first
    logging::init_logging();
    tracing::info!("AlgoVista application starting");

    let app_state = state::app::AppState::new();

    // Initialize async runtime for startup tasks
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| {
            error::VistaError::new(format!("Failed to create async runtime: {}", e), "startup")
        })
        .expect("Failed to create async runtime");

    // Run async startup tasks
    rt.block_on(async {
        // Warm the profile cache from disk
        let profile = profile::store::load_profile().await;
        app_state.set_profile(profile.clone());
        tracing::info!(username = %profile.username, "Profile loaded");

        // Regenerate the coach plan if it is missing or expired
        match coach::store::load().await {
            Ok(Some(plan)) if !plan.is_expired() => {}
            Ok(_) => {
                let problems = problems::store::load_problems().await;
                let plan = coach::generate_coach_plan(&problems, profile.goal_per_day);
                if let Err(e) = coach::store::save(&plan).await {
                    tracing::warn!(error = %e, "Failed to save coach plan");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load coach plan");
            }
        }
    });

    let app_state_arc = std::sync::Arc::new(app_state);

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(app_state_arc.clone())
        .invoke_handler(tauri::generate_handler![
            routes::get_tracker_stats,
            routes::record_solve,
            routes::add_problem,
            routes::update_problem_status,
            routes::get_problems,
            routes::get_problems_by_topic,
            routes::get_recommendations,
            routes::recommend_from_prompt,
            routes::get_coach_plan,
            routes::refresh_coach_plan,
            routes::get_analytics_data,
            routes::get_profile,
            routes::update_handles,
            routes::update_daily_goal,
            routes::sync_platform_stats,
            routes::open_problem_link,
            routes::reset_all_progress
        ])
        .run(tauri::generate_context!())
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to run Tauri application");
            e
        })
        .expect("error while running tauri application");
}
