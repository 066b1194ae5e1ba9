use uuid::Uuid;

use super::Puzzle;

/// Outcome of the most recent submission, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Correctness {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

/// Transient per-puzzle state. Replaced wholesale at the start of every round.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub round_id: Uuid,
    pub puzzle: Option<Puzzle>,
    pub submitting: bool,
    pub hint_shown: bool,
    pub hint_taken: bool,
    pub feedback: String,
    pub correctness: Correctness,
}

impl RoundState {
    pub fn fresh() -> Self {
        Self {
            round_id: Uuid::new_v4(),
            puzzle: None,
            submitting: false,
            hint_shown: false,
            hint_taken: false,
            feedback: String::new(),
            correctness: Correctness::Unknown,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.correctness == Correctness::Correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_round_is_blank() {
        let round = RoundState::fresh();
        assert!(round.puzzle.is_none());
        assert!(!round.hint_taken);
        assert!(!round.is_solved());
        assert_eq!(round.correctness, Correctness::Unknown);
        assert!(round.feedback.is_empty());
    }

    #[test]
    fn test_rounds_get_distinct_ids() {
        assert_ne!(RoundState::fresh().round_id, RoundState::fresh().round_id);
    }
}
