use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::activity::DailyActivity;

/// Derived streak numbers. Never stored; always recomputed from the
/// activity log against an injected reference date.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub max_streak: u32,
}

/// Compute current and maximum practice streaks.
///
/// `as_of` is the reference "today", passed in by the caller rather than
/// read from the clock, so the result is deterministic. A day with no
/// entry is treated exactly like a day with zero solves: both break a
/// streak.
pub fn compute_streaks(entries: &[DailyActivity], as_of: NaiveDate) -> StreakSummary {
    if entries.is_empty() {
        return StreakSummary::default();
    }

    let by_date: HashMap<NaiveDate, u32> =
        entries.iter().map(|e| (e.date, e.solved)).collect();

    let current_streak = walk_back(&by_date, as_of);
    let max_streak = longest_run(&by_date).max(current_streak);

    StreakSummary {
        current_streak,
        max_streak,
    }
}

/// Walk backward one day at a time from `as_of`, counting consecutive
/// active days. Stops at the first missing or zero day.
fn walk_back(by_date: &HashMap<NaiveDate, u32>, as_of: NaiveDate) -> u32 {
    match by_date.get(&as_of) {
        Some(&solved) if solved > 0 => {}
        _ => return 0,
    }

    let mut streak = 1;
    let mut day = as_of;
    while let Some(prev) = day.pred_opt() {
        match by_date.get(&prev) {
            Some(&solved) if solved > 0 => {
                streak += 1;
                day = prev;
            }
            _ => break,
        }
    }
    streak
}

/// Longest run of consecutive calendar dates with at least one solve,
/// over the whole history. A date gap or a zero entry ends the run.
fn longest_run(by_date: &HashMap<NaiveDate, u32>) -> u32 {
    let mut dates: Vec<NaiveDate> = by_date.keys().copied().collect();
    dates.sort();

    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for date in dates {
        let solved = by_date[&date];
        if solved == 0 {
            run = 0;
            prev = Some(date);
            continue;
        }

        run = match prev {
            Some(p) if p.succ_opt() == Some(date) && run > 0 => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(date);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(s: &str, solved: u32) -> DailyActivity {
        DailyActivity { date: d(s), solved }
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(
            compute_streaks(&[], d("2025-07-03")),
            StreakSummary::default()
        );
    }

    #[test]
    fn zero_today_breaks_current_but_not_max() {
        let entries = vec![
            entry("2025-07-01", 2),
            entry("2025-07-02", 1),
            entry("2025-07-03", 0),
        ];
        let s = compute_streaks(&entries, d("2025-07-03"));
        assert_eq!(s.current_streak, 0);
        assert_eq!(s.max_streak, 2);
    }

    #[test]
    fn three_consecutive_days() {
        let entries = vec![
            entry("2025-07-01", 1),
            entry("2025-07-02", 1),
            entry("2025-07-03", 1),
        ];
        let s = compute_streaks(&entries, d("2025-07-03"));
        assert_eq!(s.current_streak, 3);
        assert_eq!(s.max_streak, 3);
    }

    #[test]
    fn gap_breaks_run() {
        // 2 active days, a missing day, then 1 active day anchored to as_of
        let entries = vec![
            entry("2025-06-28", 1),
            entry("2025-06-29", 3),
            entry("2025-07-01", 1),
        ];
        let s = compute_streaks(&entries, d("2025-07-01"));
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.max_streak, 2);
    }
}
