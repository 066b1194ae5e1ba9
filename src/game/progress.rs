use std::collections::HashSet;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{Category, Difficulty, GameStats};
use crate::storage::PersistenceStore;

/// Stable storage keys; one key per persisted field.
pub mod keys {
    pub const SCORE: &str = "score";
    pub const STATS: &str = "stats";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const SOUND_ENABLED: &str = "sound_enabled";
    pub const DIFFICULTY: &str = "difficulty";
    pub const CATEGORY: &str = "category";
}

/// Everything restored from the store at startup. Absent or malformed values
/// fall back to defaults field by field; a corrupt stats blob must not take
/// the difficulty preference down with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedProgress {
    pub score: u32,
    pub stats: GameStats,
    pub unlocked: HashSet<String>,
    pub sound_enabled: bool,
    pub difficulty: Difficulty,
    pub category: Category,
}

impl Default for SavedProgress {
    fn default() -> Self {
        Self {
            score: 0,
            stats: GameStats::default(),
            unlocked: HashSet::new(),
            sound_enabled: true,
            difficulty: Difficulty::default(),
            category: Category::default(),
        }
    }
}

impl SavedProgress {
    pub fn load(store: &dyn PersistenceStore) -> Self {
        let mut progress = Self::default();
        if let Some(score) = read(store, keys::SCORE) {
            progress.score = score;
        }
        if let Some(stats) = read(store, keys::STATS) {
            progress.stats = stats;
        }
        if let Some(unlocked) = read(store, keys::ACHIEVEMENTS) {
            progress.unlocked = unlocked;
        }
        if let Some(sound_enabled) = read(store, keys::SOUND_ENABLED) {
            progress.sound_enabled = sound_enabled;
        }
        if let Some(difficulty) = read(store, keys::DIFFICULTY) {
            progress.difficulty = difficulty;
        }
        if let Some(category) = read(store, keys::CATEGORY) {
            progress.category = category;
        }
        progress
    }
}

fn read<T: DeserializeOwned>(store: &dyn PersistenceStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(target: "storage", "Ignoring malformed value for {:?}: {}", key, e);
            None
        }
    }
}

/// Best-effort write of one field; failures are logged, never fatal, and
/// never retried.
pub fn persist<T: Serialize>(store: &mut dyn PersistenceStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => {
            if let Err(e) = store.set(key, &json) {
                warn!(target: "storage", "Failed to persist {:?}: {}", key, e);
            }
        }
        Err(e) => {
            warn!(target: "storage", "Failed to serialize {:?}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_from_empty_store_yields_defaults() {
        let store = MemoryStore::new();
        let progress = SavedProgress::load(&store);
        assert_eq!(progress, SavedProgress::default());
        assert!(progress.sound_enabled);
        assert_eq!(progress.difficulty, Difficulty::Medium);
        assert_eq!(progress.category, Category::General);
    }

    #[test]
    fn test_load_restores_persisted_fields() {
        let mut store = MemoryStore::new();
        persist(&mut store, keys::SCORE, &17u32);
        persist(
            &mut store,
            keys::STATS,
            &GameStats {
                puzzles_attempted: 9,
                puzzles_solved: 6,
                high_score: 17,
                win_streak: 2,
            },
        );
        persist(
            &mut store,
            keys::ACHIEVEMENTS,
            &HashSet::from(["FIRST_SOLVE".to_string()]),
        );
        persist(&mut store, keys::SOUND_ENABLED, &false);
        persist(&mut store, keys::DIFFICULTY, &Difficulty::Hard);
        persist(&mut store, keys::CATEGORY, &Category::Riddle);

        let progress = SavedProgress::load(&store);
        assert_eq!(progress.score, 17);
        assert_eq!(progress.stats.puzzles_solved, 6);
        assert!(progress.unlocked.contains("FIRST_SOLVE"));
        assert!(!progress.sound_enabled);
        assert_eq!(progress.difficulty, Difficulty::Hard);
        assert_eq!(progress.category, Category::Riddle);
    }

    #[test]
    fn test_malformed_field_falls_back_alone() {
        let store = MemoryStore::new()
            .with_entry(keys::SCORE, "not a number")
            .with_entry(keys::DIFFICULTY, "\"Hard\"");
        let progress = SavedProgress::load(&store);
        assert_eq!(progress.score, 0);
        assert_eq!(progress.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let store = MemoryStore::new()
            .with_entry(keys::DIFFICULTY, "\"Nightmare\"")
            .with_entry(keys::CATEGORY, "\"Sports\"");
        let progress = SavedProgress::load(&store);
        assert_eq!(progress.difficulty, Difficulty::Medium);
        assert_eq!(progress.category, Category::General);
    }

    #[test]
    fn test_persist_failure_is_swallowed() {
        struct ReadOnlyStore;
        impl PersistenceStore for ReadOnlyStore {
            fn get(&self, _key: &str) -> Option<String> {
                None
            }
            fn set(&mut self, _key: &str, _value: &str) -> std::io::Result<()> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "store is read-only",
                ))
            }
        }

        let mut store = ReadOnlyStore;
        // must not panic or propagate
        persist(&mut store, keys::SCORE, &3u32);
    }
}
