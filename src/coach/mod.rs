pub mod store;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::problems::model::Problem;
use crate::recommend::prompt::refs_for_topic;
use crate::analytics::least_practiced_topics;

/// Fallback focus areas for a fresh profile with no tracked problems yet
const DEFAULT_WEAK_AREAS: [&str; 3] = ["graphs", "dp", "trees"];

/// A generated study suggestion, regenerated daily or on demand.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CoachPlan {
    pub next_topic: String,
    pub weak_areas: Vec<String>,
    pub daily_goal: u32,
    pub recommended: Vec<String>,
    pub generated_at: i64,
    pub expires_at: i64,
}

impl CoachPlan {
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.expires_at
    }
}

/// Build the plan: three least-practiced topics as weak areas, the
/// weakest of them as the next focus, canned references per weak area.
pub fn generate_coach_plan(problems: &[Problem], daily_goal: u32) -> CoachPlan {
    let mut weak_areas = least_practiced_topics(problems, 3);
    if weak_areas.is_empty() {
        weak_areas = DEFAULT_WEAK_AREAS.iter().map(|s| s.to_string()).collect();
    }

    let next_topic = weak_areas[0].clone();

    let mut recommended: Vec<String> = Vec::new();
    for topic in &weak_areas {
        for reference in refs_for_topic(topic) {
            if !recommended.contains(&reference) {
                recommended.push(reference);
            }
        }
    }
    recommended.truncate(4);

    CoachPlan {
        next_topic,
        weak_areas,
        daily_goal,
        recommended,
        generated_at: Utc::now().timestamp(),
        expires_at: (Utc::now() + Duration::hours(24)).timestamp(),
    }
}
