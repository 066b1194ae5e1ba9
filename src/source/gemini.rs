use log::{debug, error};
use serde_json::{json, Value};

use super::{PuzzleSource, PuzzleSourceError};
use crate::model::{Category, Difficulty, Puzzle};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Puzzle source backed by the Gemini generateContent API. The request pins a
/// JSON response schema so the model must return the three puzzle fields.
pub struct GeminiPuzzleSource {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiPuzzleSource {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
            model,
        }
    }

    fn prompt(difficulty: Difficulty, category: Category) -> String {
        let category_fragment = match category {
            Category::General => String::new(),
            other => format!("{} ", other),
        };
        format!(
            "Generate a unique and challenging {}logic puzzle or riddle of {} difficulty, \
             along with its answer and a subtle hint.",
            category_fragment, difficulty
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "puzzle": {
                    "type": "STRING",
                    "description": "A clever, non-trivial logic puzzle or riddle that can be solved with reasoning. It should not be a simple trivia question."
                },
                "answer": {
                    "type": "STRING",
                    "description": "The single, definitive answer to the puzzle. Often a single word."
                },
                "hint": {
                    "type": "STRING",
                    "description": "A clever, subtle clue for the puzzle that guides the user towards the answer without revealing it directly."
                }
            },
            "required": ["puzzle", "answer", "hint"]
        })
    }

    /// Pulls the puzzle JSON out of a generateContent response body.
    fn decode_response(payload: &Value) -> Result<Puzzle, PuzzleSourceError> {
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                PuzzleSourceError::MalformedResponse("no candidate text in response".to_string())
            })?;

        let puzzle: Puzzle = serde_json::from_str(text.trim())
            .map_err(|e| PuzzleSourceError::MalformedResponse(e.to_string()))?;

        if puzzle.text.trim().is_empty()
            || puzzle.answer.trim().is_empty()
            || puzzle.hint.trim().is_empty()
        {
            return Err(PuzzleSourceError::MalformedResponse(
                "puzzle, answer, or hint field is empty".to_string(),
            ));
        }
        Ok(puzzle)
    }
}

impl PuzzleSource for GeminiPuzzleSource {
    fn fetch(
        &self,
        difficulty: Difficulty,
        category: Category,
    ) -> Result<Puzzle, PuzzleSourceError> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": Self::prompt(difficulty, category) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema(),
                "temperature": 0.9,
            }
        });

        debug!(target: "source", "Requesting {} {} puzzle from {}", difficulty, category, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                error!(target: "source", "Puzzle request failed: {}", e);
                PuzzleSourceError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(target: "source", "Puzzle request rejected: HTTP {}", status);
            return Err(PuzzleSourceError::Transport(format!("HTTP {}", status)));
        }

        let payload: Value = response
            .json()
            .map_err(|e| PuzzleSourceError::MalformedResponse(e.to_string()))?;
        Self::decode_response(&payload)
    }
}
