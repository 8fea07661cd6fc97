use algovista_lib::problems::model::{Difficulty, Problem, Status};
use algovista_lib::recommend::selector::recommend;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn problem(id: &str, topic: &str, difficulty: Difficulty, status: Status) -> Problem {
    Problem {
        id: id.to_string(),
        title: format!("Problem {}", id),
        link: format!("https://example.com/{}", id),
        topic: topic.to_string(),
        difficulty,
        status,
        created_at: 0,
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_empty_input_gives_empty_output() {
    assert!(recommend(&[], &mut rng()).is_empty());
}

#[test]
fn test_output_is_unique_and_bounded() {
    let problems = vec![
        problem("1", "dp", Difficulty::Easy, Status::Unsolved),
        problem("2", "dp", Difficulty::Medium, Status::Solved),
        problem("3", "graphs", Difficulty::Easy, Status::Bookmark),
        problem("4", "trees", Difficulty::Hard, Status::Unsolved),
        problem("5", "graphs", Difficulty::Hard, Status::Solved),
        problem("6", "sorting", Difficulty::Medium, Status::Unsolved),
    ];
    // Any seed must respect the invariants
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picks = recommend(&problems, &mut rng);
        assert!(picks.len() <= 4, "got {} picks", picks.len());
        for (i, p) in picks.iter().enumerate() {
            assert!(
                !picks[..i].iter().any(|q| q.id == p.id),
                "duplicate id {}",
                p.id
            );
        }
    }
}

#[test]
fn test_priority_rules_scenario() {
    let problems = vec![
        problem("1", "dp", Difficulty::Easy, Status::Unsolved),
        problem("2", "dp", Difficulty::Medium, Status::Solved),
        problem("3", "graphs", Difficulty::Easy, Status::Bookmark),
        problem("4", "trees", Difficulty::Hard, Status::Unsolved),
    ];
    let picks = recommend(&problems, &mut rng());
    let ids: Vec<&str> = picks.iter().map(|p| p.id.as_str()).collect();

    // Bookmark and hard rules always fire here
    assert!(ids.contains(&"3"), "bookmark pick missing: {:?}", ids);
    assert!(ids.contains(&"4"), "hard pick missing: {:?}", ids);
    // The random unsolved pick comes from the unsolved subset
    assert!(ids[0] == "1" || ids[0] == "4", "unexpected first pick {:?}", ids);
    // Least-practiced topic is dp; its only non-solved problem is 1,
    // which collapses with the unsolved pick when both fire
    assert!(picks.len() <= 3);
}

#[test]
fn test_unsolved_pick_is_from_unsolved_subset() {
    let problems = vec![
        problem("1", "dp", Difficulty::Easy, Status::Solved),
        problem("2", "dp", Difficulty::Easy, Status::Unsolved),
        problem("3", "graphs", Difficulty::Easy, Status::Solved),
    ];
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picks = recommend(&problems, &mut rng);
        assert_eq!(picks[0].status, Status::Unsolved);
    }
}

#[test]
fn test_least_practiced_topic_tie_breaks_to_first_seen() {
    // dp and graphs both have one solved problem; dp appears first.
    // Neither topic's remaining problems may be solved for the rule to fire.
    let problems = vec![
        problem("1", "dp", Difficulty::Easy, Status::Solved),
        problem("2", "graphs", Difficulty::Easy, Status::Solved),
        problem("3", "dp", Difficulty::Medium, Status::Bookmark),
        problem("4", "graphs", Difficulty::Medium, Status::Bookmark),
    ];
    let picks = recommend(&problems, &mut rng());
    // No unsolved problems, so the first pick comes from rule 2
    assert_eq!(picks[0].id, "3");
}

#[test]
fn test_bookmark_pick_is_first_in_input_order() {
    let problems = vec![
        problem("1", "dp", Difficulty::Easy, Status::Solved),
        problem("2", "graphs", Difficulty::Easy, Status::Bookmark),
        problem("3", "trees", Difficulty::Easy, Status::Bookmark),
    ];
    let picks = recommend(&problems, &mut rng());
    let bookmark_ids: Vec<&str> = picks
        .iter()
        .filter(|p| p.status == Status::Bookmark)
        .map(|p| p.id.as_str())
        .collect();
    assert!(bookmark_ids.contains(&"2"));
}

#[test]
fn test_hard_rule_skips_solved_hard_problems() {
    let problems = vec![
        problem("1", "dp", Difficulty::Hard, Status::Solved),
        problem("2", "graphs", Difficulty::Hard, Status::Bookmark),
    ];
    let picks = recommend(&problems, &mut rng());
    assert!(picks.iter().any(|p| p.id == "2"));
    assert!(!picks.iter().any(|p| p.id == "1"));
}

#[test]
fn test_all_solved_yields_empty() {
    let problems = vec![
        problem("1", "dp", Difficulty::Easy, Status::Solved),
        problem("2", "graphs", Difficulty::Medium, Status::Solved),
    ];
    // No unsolved, no bookmark, no unsolved hard; least-practiced rule
    // finds no non-solved candidate either
    let picks = recommend(&problems, &mut rng());
    assert!(picks.is_empty(), "expected no picks, got {:?}", picks);
}

#[test]
fn test_input_is_not_mutated() {
    let problems = vec![
        problem("1", "dp", Difficulty::Easy, Status::Unsolved),
        problem("2", "graphs", Difficulty::Hard, Status::Bookmark),
    ];
    let before: Vec<String> = problems.iter().map(|p| p.id.clone()).collect();
    let _ = recommend(&problems, &mut rng());
    let after: Vec<String> = problems.iter().map(|p| p.id.clone()).collect();
    assert_eq!(before, after);
}
