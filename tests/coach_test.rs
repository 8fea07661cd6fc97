use algovista_lib::coach::generate_coach_plan;
use algovista_lib::problems::model::{Difficulty, Problem, Status};
use algovista_lib::recommend::prompt::refs_for_topic;

fn problem(id: &str, topic: &str, status: Status) -> Problem {
    Problem {
        id: id.to_string(),
        title: format!("Problem {}", id),
        link: String::new(),
        topic: topic.to_string(),
        difficulty: Difficulty::Medium,
        status,
        created_at: 0,
    }
}

#[test]
fn test_weak_areas_are_least_practiced() {
    let problems = vec![
        problem("1", "dp", Status::Solved),
        problem("2", "dp", Status::Solved),
        problem("3", "graphs", Status::Solved),
        problem("4", "trees", Status::Unsolved),
    ];
    let plan = generate_coach_plan(&problems, 2);

    assert_eq!(plan.weak_areas, vec!["trees", "graphs", "dp"]);
    assert_eq!(plan.next_topic, "trees");
    assert_eq!(plan.daily_goal, 2);
}

#[test]
fn test_empty_problem_set_falls_back_to_defaults() {
    let plan = generate_coach_plan(&[], 3);
    assert_eq!(plan.weak_areas, vec!["graphs", "dp", "trees"]);
    assert_eq!(plan.next_topic, "graphs");
    assert!(!plan.recommended.is_empty());
    assert!(plan.recommended.len() <= 4);
}

#[test]
fn test_plan_is_not_born_expired() {
    let plan = generate_coach_plan(&[], 2);
    assert!(!plan.is_expired());
    assert!(plan.expires_at > plan.generated_at);
}

#[test]
fn test_recommended_refs_are_unique() {
    let problems = vec![
        problem("1", "graphs", Status::Unsolved),
        problem("2", "dp", Status::Unsolved),
        problem("3", "trees", Status::Unsolved),
    ];
    let plan = generate_coach_plan(&problems, 2);
    for (i, r) in plan.recommended.iter().enumerate() {
        assert!(!plan.recommended[..i].contains(r), "duplicate ref {}", r);
    }
}

#[test]
fn test_refs_for_unknown_topic_fall_back() {
    assert_eq!(refs_for_topic("bitmask"), vec!["LeetCode 1 – Two Sum"]);
    assert_eq!(refs_for_topic("graphs").len(), 2);
}
