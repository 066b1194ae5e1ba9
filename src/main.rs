use std::env;
use std::rc::Rc;

use log::warn;

use logicquest::events::Channel;
use logicquest::game::{Scheduler, SessionController, Timing};
use logicquest::model::{SessionCommand, SessionEvent};
use logicquest::source::GeminiPuzzleSource;
use logicquest::storage::FileStore;
use logicquest::ui::{console, LoggingAudioPlayer, LoggingHaptics};

const DEFAULT_DATA_DIR: &str = ".logic-quest";

fn main() -> std::io::Result<()> {
    env_logger::init();

    let data_dir =
        env::var("LOGIC_QUEST_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    let store = FileStore::new(data_dir);

    let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        warn!(target: "session", "GEMINI_API_KEY is not set; puzzle fetches will fail");
    }

    let (command_emitter, command_observer) = Channel::<SessionCommand>::new();
    let (event_emitter, event_observer) = Channel::<SessionEvent>::new();
    let scheduler = Scheduler::new();

    let controller = SessionController::new(
        command_observer,
        event_emitter,
        Rc::new(GeminiPuzzleSource::new(api_key)),
        Box::new(store),
        Rc::new(LoggingAudioPlayer),
        Rc::new(LoggingHaptics),
        scheduler.clone(),
        Timing::default(),
    );

    command_emitter.emit(&SessionCommand::InitDisplay);
    // returning players resume where they left off; first launch starts a round
    let first_launch = controller.borrow().stats().puzzles_attempted == 0;
    if first_launch {
        command_emitter.emit(&SessionCommand::NewRound);
    }

    console::run(controller, command_emitter, event_observer, scheduler)
}
