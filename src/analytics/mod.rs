use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::activity::DailyActivity;
use crate::problems::model::{Difficulty, Problem, Status};

/// Trailing window the calendar heatmap covers, in days
const HEATMAP_WINDOW_DAYS: i64 = 120;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub solved: u32,
    /// Render intensity, 0-4
    pub level: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyticsPayload {
    pub solved_by_topic: HashMap<String, u32>,
    pub problems_by_difficulty: HashMap<String, u32>,
    pub total_problems: u32,
    pub total_solved_problems: u32,
    /// Sum of the activity log's daily solve counts
    pub total_activity: u32,
    pub last_week_solved: u32,
    pub prev_week_solved: u32,
    pub heatmap: Vec<HeatmapCell>,
}

/// Single aggregation pass over the problem set and activity log.
/// `as_of` anchors the heatmap window and the weekly comparison.
pub fn compute_analytics(
    problems: &[Problem],
    activity: &[DailyActivity],
    as_of: NaiveDate,
) -> AnalyticsPayload {
    let mut solved_by_topic: HashMap<String, u32> = HashMap::new();
    let mut problems_by_difficulty: HashMap<String, u32> = HashMap::new();
    let mut total_solved_problems = 0;

    for problem in problems {
        let difficulty = match problem.difficulty {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        *problems_by_difficulty.entry(difficulty.to_string()).or_insert(0) += 1;

        if problem.status == Status::Solved {
            total_solved_problems += 1;
            *solved_by_topic.entry(problem.topic.clone()).or_insert(0) += 1;
        }
    }

    let week_ago = as_of - Duration::days(7);
    let two_weeks_ago = as_of - Duration::days(14);
    let window_start = as_of - Duration::days(HEATMAP_WINDOW_DAYS);

    let mut total_activity = 0;
    let mut last_week_solved = 0;
    let mut prev_week_solved = 0;
    let mut heatmap = Vec::new();

    for entry in activity {
        total_activity += entry.solved;

        if entry.date > week_ago && entry.date <= as_of {
            last_week_solved += entry.solved;
        } else if entry.date > two_weeks_ago && entry.date <= week_ago {
            prev_week_solved += entry.solved;
        }

        if entry.date >= window_start && entry.date <= as_of {
            heatmap.push(HeatmapCell {
                date: entry.date,
                solved: entry.solved,
                level: intensity_level(entry.solved),
            });
        }
    }

    heatmap.sort_by_key(|c| c.date);

    AnalyticsPayload {
        solved_by_topic,
        problems_by_difficulty,
        total_problems: problems.len() as u32,
        total_solved_problems,
        total_activity,
        last_week_solved,
        prev_week_solved,
        heatmap,
    }
}

/// Heatmap bucket for a day's solve count
pub fn intensity_level(solved: u32) -> u8 {
    match solved {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 3,
        _ => 4,
    }
}

/// Topics ranked by how little they have been practiced: every topic seen
/// in the problem set, ordered by ascending solved count, ties toward the
/// topic encountered first in input order.
pub fn least_practiced_topics(problems: &[Problem], n: usize) -> Vec<String> {
    let mut topics: Vec<(&str, u32)> = Vec::new();
    for p in problems {
        if !topics.iter().any(|(t, _)| *t == p.topic) {
            topics.push((p.topic.as_str(), 0));
        }
    }
    for p in problems.iter().filter(|p| p.status == Status::Solved) {
        if let Some((_, n)) = topics.iter_mut().find(|(t, _)| *t == p.topic) {
            *n += 1;
        }
    }

    topics.sort_by_key(|&(_, count)| count);
    topics.into_iter().take(n).map(|(t, _)| t.to_string()).collect()
}
