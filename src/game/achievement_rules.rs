use std::collections::HashSet;

use crate::model::{Achievement, GameStats, CATALOG};

/// Returns achievements whose unlock condition newly holds, in catalog order.
/// Pure; the caller merges the result into the unlocked set and persists it.
/// Only invoked after a correct submission, with the post-update stats.
pub fn newly_unlocked(
    stats: &GameStats,
    score: u32,
    hint_taken_this_puzzle: bool,
    unlocked: &HashSet<String>,
) -> Vec<Achievement> {
    let conditions = [
        ("FIRST_SOLVE", stats.puzzles_solved >= 1),
        ("TEN_SOLVED", stats.puzzles_solved >= 10),
        ("HUNDRED_SOLVED", stats.puzzles_solved >= 100),
        ("STREAK_FIVE", stats.win_streak >= 5),
        // evaluated on every hint-free solve, not just the first
        ("NO_HINT_WIN", !hint_taken_this_puzzle),
        ("HIGH_SCORE_50", score >= 50),
    ];

    let mut result = Vec::new();
    for (id, condition) in conditions {
        if condition && !unlocked.contains(id) {
            if let Some(achievement) = Achievement::by_id(id) {
                result.push(*achievement);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(achievements: &[Achievement]) -> Vec<&str> {
        achievements.iter().map(|a| a.id).collect()
    }

    fn solved(n: u32, streak: u32) -> GameStats {
        GameStats {
            puzzles_attempted: n + 2,
            puzzles_solved: n,
            high_score: 0,
            win_streak: streak,
        }
    }

    #[test]
    fn test_first_solve_unlocks_with_no_hint_win() {
        let unlocked = HashSet::new();
        let newly = newly_unlocked(&solved(1, 1), 4, false, &unlocked);
        assert_eq!(ids(&newly), vec!["FIRST_SOLVE", "NO_HINT_WIN"]);
    }

    #[test]
    fn test_hinted_first_solve_skips_no_hint_win() {
        let unlocked = HashSet::new();
        let newly = newly_unlocked(&solved(1, 1), 2, true, &unlocked);
        assert_eq!(ids(&newly), vec!["FIRST_SOLVE"]);
    }

    #[test]
    fn test_streak_five_threshold() {
        let unlocked: HashSet<String> =
            ["FIRST_SOLVE", "NO_HINT_WIN"].iter().map(|s| s.to_string()).collect();
        assert!(ids(&newly_unlocked(&solved(6, 4), 10, true, &unlocked)).is_empty());
        assert_eq!(
            ids(&newly_unlocked(&solved(7, 5), 12, true, &unlocked)),
            vec!["STREAK_FIVE"]
        );
    }

    #[test]
    fn test_results_follow_catalog_order() {
        let unlocked = HashSet::new();
        let newly = newly_unlocked(&solved(100, 7), 64, false, &unlocked);
        assert_eq!(
            ids(&newly),
            vec![
                "FIRST_SOLVE",
                "TEN_SOLVED",
                "HUNDRED_SOLVED",
                "STREAK_FIVE",
                "NO_HINT_WIN",
                "HIGH_SCORE_50"
            ]
        );
        assert_eq!(newly.len(), CATALOG.len());
    }

    #[test]
    fn test_idempotent_against_unlocked_set() {
        let mut unlocked = HashSet::new();
        let first = newly_unlocked(&solved(10, 5), 50, false, &unlocked);
        assert!(!first.is_empty());
        for achievement in &first {
            unlocked.insert(achievement.id.to_string());
        }
        let second = newly_unlocked(&solved(10, 5), 50, false, &unlocked);
        assert!(second.is_empty());
    }

    #[test]
    fn test_no_hint_win_is_re_evaluated_each_solve() {
        // coarse predicate: any hint-free solve qualifies, streak continuity
        // is irrelevant
        let unlocked: HashSet<String> =
            ["FIRST_SOLVE"].iter().map(|s| s.to_string()).collect();
        let newly = newly_unlocked(&solved(3, 1), 6, false, &unlocked);
        assert_eq!(ids(&newly), vec!["NO_HINT_WIN"]);
    }
}
