mod achievement;
mod category;
mod difficulty;
mod game_stats;
mod puzzle;
mod round_state;
mod session_command;
mod session_event;

pub use achievement::{Achievement, CATALOG};
pub use category::Category;
pub use difficulty::Difficulty;
pub use game_stats::GameStats;
pub use puzzle::Puzzle;
pub use round_state::{Correctness, RoundState};
pub use session_command::SessionCommand;
pub use session_event::SessionEvent;
