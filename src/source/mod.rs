mod gemini;

pub use gemini::GeminiPuzzleSource;

use crate::model::{Category, Difficulty, Puzzle};

/// Remote puzzle generation. Any transport, parse, or schema problem is a
/// failure; there is no partial success.
pub trait PuzzleSource {
    fn fetch(&self, difficulty: Difficulty, category: Category)
        -> Result<Puzzle, PuzzleSourceError>;
}

#[derive(Debug)]
pub enum PuzzleSourceError {
    Transport(String),
    MalformedResponse(String),
}

impl std::fmt::Display for PuzzleSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PuzzleSourceError::Transport(detail) => {
                write!(f, "puzzle generation request failed: {}", detail)
            }
            PuzzleSourceError::MalformedResponse(detail) => {
                write!(f, "puzzle generation returned an unusable response: {}", detail)
            }
        }
    }
}

impl std::error::Error for PuzzleSourceError {}
