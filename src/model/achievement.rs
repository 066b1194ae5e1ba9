/// A single achievement from the static catalog. Never mutated at runtime;
/// unlock state is tracked separately as a set of ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The full catalog, in unlock-evaluation order.
pub const CATALOG: [Achievement; 6] = [
    Achievement {
        id: "FIRST_SOLVE",
        name: "Novice Riddler",
        description: "You solved your very first puzzle!",
        icon: "🔰",
    },
    Achievement {
        id: "TEN_SOLVED",
        name: "Brainiac",
        description: "You've solved 10 puzzles. Impressive!",
        icon: "🧠",
    },
    Achievement {
        id: "HUNDRED_SOLVED",
        name: "Master Riddler",
        description: "You've conquered 100 puzzles. A true legend!",
        icon: "🏆",
    },
    Achievement {
        id: "STREAK_FIVE",
        name: "On a Roll!",
        description: "You solved 5 puzzles in a row.",
        icon: "🔥",
    },
    Achievement {
        id: "NO_HINT_WIN",
        name: "Sharp Mind",
        description: "You solved a puzzle without using a hint.",
        icon: "💡",
    },
    Achievement {
        id: "HIGH_SCORE_50",
        name: "Score Keeper",
        description: "You reached a score of 50!",
        icon: "⭐",
    },
];

impl Achievement {
    pub fn by_id(id: &str) -> Option<&'static Achievement> {
        CATALOG.iter().find(|achievement| achievement.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_six_unique_ids() {
        let ids: HashSet<&str> = CATALOG.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_by_id() {
        assert_eq!(Achievement::by_id("STREAK_FIVE").unwrap().name, "On a Roll!");
        assert!(Achievement::by_id("UNKNOWN").is_none());
    }
}
