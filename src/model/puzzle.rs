use serde::{Deserialize, Serialize};

use crate::helpers::normalize_guess;

/// One generated puzzle. Immutable once fetched; replaced wholesale at the
/// start of every round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Puzzle {
    /// The wire format uses "puzzle" for the riddle body.
    #[serde(rename = "puzzle")]
    pub text: String,
    pub answer: String,
    pub hint: String,
}

impl Puzzle {
    pub fn matches_guess(&self, guess: &str) -> bool {
        normalize_guess(guess) == normalize_guess(&self.answer)
    }

    pub fn has_hint(&self) -> bool {
        !self.hint.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(answer: &str) -> Puzzle {
        Puzzle {
            text: "What has keys but cannot open locks?".to_string(),
            answer: answer.to_string(),
            hint: "Think music.".to_string(),
        }
    }

    #[test]
    fn test_guess_matching_ignores_case_and_whitespace() {
        let p = puzzle("piano");
        assert!(p.matches_guess("  Piano "));
        assert!(p.matches_guess("PIANO"));
        assert!(!p.matches_guess("organ"));
    }

    #[test]
    fn test_answer_is_normalized_too() {
        let p = puzzle(" Paris ");
        assert!(p.matches_guess("paris"));
    }

    #[test]
    fn test_has_hint_rejects_blank_hints() {
        let mut p = puzzle("piano");
        assert!(p.has_hint());
        p.hint = "   ".to_string();
        assert!(!p.has_hint());
    }

    #[test]
    fn test_wire_field_name_round_trip() {
        let json = r#"{"puzzle":"Riddle body","answer":"echo","hint":"It repeats."}"#;
        let p: Puzzle = serde_json::from_str(json).unwrap();
        assert_eq!(p.text, "Riddle body");
        assert_eq!(p.answer, "echo");
    }
}
