use std::collections::HashSet;

use super::{Achievement, Category, Correctness, Difficulty, GameStats, Puzzle};

/// State changes the session controller publishes for rendering.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    LoadingChanged(bool),
    /// `None` while loading or after a failed fetch.
    PuzzleUpdated(Option<Puzzle>),
    SubmittingChanged(bool),
    FeedbackChanged {
        message: String,
        correctness: Correctness,
    },
    /// `delta` is the signed change, for transient "+N" animations.
    ScoreChanged {
        score: u32,
        delta: i32,
    },
    StatsChanged(GameStats),
    HintRevealed(String),
    UnlockedAchievementsChanged(HashSet<String>),
    AchievementToastShown(Achievement),
    AchievementToastLeaving(Achievement),
    AchievementToastDismissed(Achievement),
    SoundEnabledChanged(bool),
    DifficultyChanged(Difficulty),
    CategoryChanged(Category),
}
