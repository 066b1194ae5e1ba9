use super::{Category, Difficulty};

/// Intents the presentation layer may send to the session controller.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Re-emit the full current state; used by frontends after wiring up.
    InitDisplay,
    NewRound,
    SubmitGuess(String),
    RequestHint,
    ChangeDifficulty(Difficulty),
    ChangeCategory(Category),
    /// Destructive; ignored unless the presentation layer confirmed it.
    ResetProgress { confirmed: bool },
    SetSoundEnabled(bool),
}
