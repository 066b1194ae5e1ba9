use serde::{Deserialize, Serialize};

/// Puzzle category. Passed through to the puzzle source as part of the
/// generation prompt; otherwise inert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Math,
    Wordplay,
    Riddle,
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::General,
            Category::Math,
            Category::Wordplay,
            Category::Riddle,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Math => "Math",
            Category::Wordplay => "Wordplay",
            Category::Riddle => "Riddle",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::all()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
