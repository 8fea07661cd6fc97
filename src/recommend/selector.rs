use rand::seq::SliceRandom;
use rand::Rng;

use crate::problems::model::{Difficulty, Problem, Status};

/// Fixed-priority, best-effort problem recommendation.
///
/// Each rule contributes at most one problem, in this order:
/// 1. a uniformly random unsolved problem,
/// 2. the first non-solved problem from the least-practiced topic,
/// 3. the first bookmarked problem,
/// 4. the first non-solved Hard problem.
///
/// The result is unique by id (first occurrence wins) and never longer
/// than four. The random source is injected so callers can seed it.
pub fn recommend<R: Rng + ?Sized>(problems: &[Problem], rng: &mut R) -> Vec<Problem> {
    if problems.is_empty() {
        return Vec::new();
    }

    let mut picks: Vec<&Problem> = Vec::new();

    // 1. One unsolved problem, picked at random
    let unsolved: Vec<&Problem> = problems
        .iter()
        .filter(|p| p.status == Status::Unsolved)
        .collect();
    if let Some(p) = unsolved.choose(rng) {
        picks.push(*p);
    }

    // 2. One from the least-practiced topic
    if let Some(topic) = least_practiced_topic(problems) {
        if let Some(p) = problems
            .iter()
            .find(|p| p.topic == topic && p.status != Status::Solved)
        {
            picks.push(p);
        }
    }

    // 3. One bookmarked problem
    if let Some(p) = problems.iter().find(|p| p.status == Status::Bookmark) {
        picks.push(p);
    }

    // 4. One hard problem
    if let Some(p) = problems
        .iter()
        .find(|p| p.difficulty == Difficulty::Hard && p.status != Status::Solved)
    {
        picks.push(p);
    }

    // Unique by id, first occurrence wins
    let mut out: Vec<Problem> = Vec::with_capacity(picks.len());
    for p in picks {
        if !out.iter().any(|q| q.id == p.id) {
            out.push(p.clone());
        }
    }
    out
}

/// Topic with the fewest solved problems, counting solved entries only.
/// Ties break toward the topic encountered first in input order. None if
/// nothing is solved yet.
fn least_practiced_topic(problems: &[Problem]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for p in problems.iter().filter(|p| p.status == Status::Solved) {
        match counts.iter_mut().find(|(topic, _)| *topic == p.topic) {
            Some((_, n)) => *n += 1,
            None => counts.push((p.topic.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (topic, n) in counts {
        match best {
            Some((_, m)) if n >= m => {}
            _ => best = Some((topic, n)),
        }
    }
    best.map(|(topic, _)| topic.to_string())
}
