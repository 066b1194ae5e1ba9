pub mod achievement_rules;
pub mod progress;
pub mod scheduler;
pub mod session_controller;
pub mod toast_queue;

pub use scheduler::{Scheduler, Timing};
pub use session_controller::SessionController;
pub use toast_queue::{ToastQueue, ToastState};
