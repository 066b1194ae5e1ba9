use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Points awarded for a hinted solve; doubled when no hint was taken.
    pub fn base_points(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_name(name: &str) -> Option<Difficulty> {
        Difficulty::all()
            .into_iter()
            .find(|difficulty| difficulty.label().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_points_mapping() {
        assert_eq!(Difficulty::Easy.base_points(), 1);
        assert_eq!(Difficulty::Medium.base_points(), 2);
        assert_eq!(Difficulty::Hard.base_points(), 3);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Difficulty::from_name("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name(" Easy "), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_name("veteran"), None);
    }

    #[test]
    fn test_unknown_serialized_value_is_rejected() {
        assert!(serde_json::from_str::<Difficulty>("\"Medium\"").is_ok());
        assert!(serde_json::from_str::<Difficulty>("\"Impossible\"").is_err());
    }
}
