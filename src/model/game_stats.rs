use serde::{Deserialize, Serialize};

/// Lifetime play statistics, persisted across sessions.
///
/// Invariants: `puzzles_solved <= puzzles_attempted`; `win_streak` counts
/// consecutive correct solves since the last miss; `high_score` never
/// decreases except on a full progress reset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameStats {
    pub puzzles_attempted: u32,
    pub puzzles_solved: u32,
    pub high_score: u32,
    pub win_streak: u32,
}

impl GameStats {
    pub fn record_attempt(&mut self) {
        self.puzzles_attempted += 1;
    }

    pub fn record_solve(&mut self, new_score: u32) {
        self.puzzles_solved += 1;
        self.win_streak += 1;
        self.high_score = self.high_score.max(new_score);
    }

    pub fn record_miss(&mut self) {
        self.win_streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_updates_streak_and_high_score() {
        let mut stats = GameStats::default();
        stats.record_attempt();
        stats.record_solve(4);
        assert_eq!(stats.puzzles_attempted, 1);
        assert_eq!(stats.puzzles_solved, 1);
        assert_eq!(stats.win_streak, 1);
        assert_eq!(stats.high_score, 4);
    }

    #[test]
    fn test_miss_zeroes_streak_only() {
        let mut stats = GameStats {
            puzzles_attempted: 10,
            puzzles_solved: 6,
            high_score: 22,
            win_streak: 3,
        };
        stats.record_miss();
        assert_eq!(stats.win_streak, 0);
        assert_eq!(stats.puzzles_solved, 6);
        assert_eq!(stats.high_score, 22);
    }

    #[test]
    fn test_high_score_is_monotonic() {
        let mut stats = GameStats::default();
        stats.record_solve(10);
        stats.record_solve(4);
        assert_eq!(stats.high_score, 10);
    }

    #[test]
    fn test_partial_stored_payload_fills_defaults() {
        let stats: GameStats = serde_json::from_str(r#"{"puzzles_attempted":3}"#).unwrap();
        assert_eq!(stats.puzzles_attempted, 3);
        assert_eq!(stats.puzzles_solved, 0);
        assert_eq!(stats.win_streak, 0);
    }
}
