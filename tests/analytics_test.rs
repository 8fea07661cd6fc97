use algovista_lib::activity::DailyActivity;
use algovista_lib::analytics::{compute_analytics, intensity_level, least_practiced_topics};
use algovista_lib::problems::model::{Difficulty, Problem, Status};
use chrono::NaiveDate;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn entry(s: &str, solved: u32) -> DailyActivity {
    DailyActivity { date: d(s), solved }
}

fn problem(id: &str, topic: &str, difficulty: Difficulty, status: Status) -> Problem {
    Problem {
        id: id.to_string(),
        title: format!("Problem {}", id),
        link: String::new(),
        topic: topic.to_string(),
        difficulty,
        status,
        created_at: 0,
    }
}

#[test]
fn test_intensity_buckets() {
    assert_eq!(intensity_level(0), 0);
    assert_eq!(intensity_level(1), 1);
    assert_eq!(intensity_level(2), 2);
    assert_eq!(intensity_level(3), 3);
    assert_eq!(intensity_level(4), 4);
    assert_eq!(intensity_level(17), 4);
}

#[test]
fn test_topic_and_difficulty_counts() {
    let problems = vec![
        problem("1", "dp", Difficulty::Easy, Status::Solved),
        problem("2", "dp", Difficulty::Hard, Status::Solved),
        problem("3", "graphs", Difficulty::Medium, Status::Solved),
        problem("4", "graphs", Difficulty::Medium, Status::Unsolved),
    ];
    let payload = compute_analytics(&problems, &[], d("2025-07-03"));

    assert_eq!(payload.total_problems, 4);
    assert_eq!(payload.total_solved_problems, 3);
    assert_eq!(payload.solved_by_topic.get("dp"), Some(&2));
    assert_eq!(payload.solved_by_topic.get("graphs"), Some(&1));
    assert_eq!(payload.problems_by_difficulty.get("Medium"), Some(&2));
    assert_eq!(payload.problems_by_difficulty.get("Easy"), Some(&1));
    assert_eq!(payload.problems_by_difficulty.get("Hard"), Some(&1));
}

#[test]
fn test_weekly_window_split() {
    let as_of = d("2025-07-14");
    let activity = vec![
        entry("2025-07-14", 2), // inside last week
        entry("2025-07-08", 1), // inside last week (boundary)
        entry("2025-07-07", 3), // previous week (boundary)
        entry("2025-07-01", 4), // previous week
        entry("2025-06-20", 5), // older than both windows
    ];
    let payload = compute_analytics(&[], &activity, as_of);

    assert_eq!(payload.last_week_solved, 3);
    assert_eq!(payload.prev_week_solved, 7);
    assert_eq!(payload.total_activity, 15);
}

#[test]
fn test_heatmap_window_and_levels() {
    let as_of = d("2025-07-03");
    let activity = vec![
        entry("2025-07-03", 4),
        entry("2025-07-01", 1),
        entry("2024-01-01", 9), // far outside the 120-day window
    ];
    let payload = compute_analytics(&[], &activity, as_of);

    assert_eq!(payload.heatmap.len(), 2);
    assert_eq!(payload.heatmap[0].date, d("2025-07-01"));
    assert_eq!(payload.heatmap[0].level, 1);
    assert_eq!(payload.heatmap[1].date, d("2025-07-03"));
    assert_eq!(payload.heatmap[1].level, 4);
}

#[test]
fn test_least_practiced_topics_ordering() {
    let problems = vec![
        problem("1", "dp", Difficulty::Easy, Status::Solved),
        problem("2", "dp", Difficulty::Easy, Status::Solved),
        problem("3", "graphs", Difficulty::Easy, Status::Solved),
        problem("4", "trees", Difficulty::Easy, Status::Unsolved),
    ];
    // trees has zero solved, graphs one, dp two
    let ranked = least_practiced_topics(&problems, 3);
    assert_eq!(ranked, vec!["trees", "graphs", "dp"]);
}

#[test]
fn test_least_practiced_topics_tie_keeps_input_order() {
    let problems = vec![
        problem("1", "sorting", Difficulty::Easy, Status::Unsolved),
        problem("2", "trees", Difficulty::Easy, Status::Unsolved),
    ];
    let ranked = least_practiced_topics(&problems, 2);
    assert_eq!(ranked, vec!["sorting", "trees"]);
}

#[test]
fn test_empty_inputs() {
    let payload = compute_analytics(&[], &[], d("2025-07-03"));
    assert_eq!(payload.total_problems, 0);
    assert_eq!(payload.total_activity, 0);
    assert!(payload.heatmap.is_empty());
    assert!(payload.solved_by_topic.is_empty());
    assert!(least_practiced_topics(&[], 3).is_empty());
}
