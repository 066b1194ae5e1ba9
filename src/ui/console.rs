use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::thread;
use std::time::Instant;

use log::trace;

use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver};
use crate::game::{Scheduler, SessionController};
use crate::model::{Category, Correctness, Difficulty, SessionCommand, SessionEvent};

const HELP: &str = "\
Commands:
  new                      start a new round
  hint                     reveal the hint (costs 1 point)
  difficulty <easy|medium|hard>
  category <general|math|wordplay|riddle>
  sound <on|off>
  stats                    show lifetime statistics
  reset                    wipe all progress
  help                     show this message
  quit                     exit
Anything else is submitted as your answer.";

/// Line-oriented frontend. Reads commands from stdin, renders session events
/// to stdout, and replays scheduled delays in real time between inputs.
pub fn run(
    controller: Rc<RefCell<SessionController>>,
    commands: EventEmitter<SessionCommand>,
    events: EventObserver<SessionEvent>,
    scheduler: Rc<Scheduler>,
) -> io::Result<()> {
    let subscription = events.subscribe(render);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        drain_timers(&scheduler);
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        trace!(target: "console", "Input: {:?}", input);
        let mut parts = input.splitn(2, ' ');
        let word = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next().unwrap_or_default().trim();

        match word.as_str() {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "new" => commands.emit(&SessionCommand::NewRound),
            "hint" => commands.emit(&SessionCommand::RequestHint),
            "stats" => print_stats(&controller.borrow()),
            "difficulty" => match Difficulty::from_name(argument) {
                Some(difficulty) => {
                    commands.emit(&SessionCommand::ChangeDifficulty(difficulty))
                }
                None => println!("Unknown difficulty {:?}. Try easy, medium, or hard.", argument),
            },
            "category" => match Category::from_name(argument) {
                Some(category) => commands.emit(&SessionCommand::ChangeCategory(category)),
                None => println!(
                    "Unknown category {:?}. Try general, math, wordplay, or riddle.",
                    argument
                ),
            },
            "sound" => match argument {
                "on" => commands.emit(&SessionCommand::SetSoundEnabled(true)),
                "off" => commands.emit(&SessionCommand::SetSoundEnabled(false)),
                _ => println!("Usage: sound <on|off>"),
            },
            "reset" => {
                print!("This wipes your score, stats, and achievements. Type 'yes' to confirm: ");
                io::stdout().flush()?;
                let answer = match lines.next() {
                    Some(line) => line?,
                    None => break,
                };
                commands.emit(&SessionCommand::ResetProgress {
                    confirmed: answer.trim().eq_ignore_ascii_case("yes"),
                });
            }
            _ => commands.emit(&SessionCommand::SubmitGuess(input.to_string())),
        }
    }

    subscription.unsubscribe();
    controller.borrow_mut().destroy();
    Ok(())
}

/// Sleeps through and fires every pending timer so pacing (verification
/// pauses, toast display, feedback auto-clear) plays out before the next
/// prompt.
fn drain_timers(scheduler: &Scheduler) {
    while let Some(due) = scheduler.next_due() {
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        scheduler.fire_due(Instant::now());
    }
}

fn render(event: &SessionEvent) {
    match event {
        SessionEvent::LoadingChanged(true) => println!("Generating a new puzzle..."),
        SessionEvent::LoadingChanged(false) => {}
        SessionEvent::PuzzleUpdated(Some(puzzle)) => println!("\n{}\n", puzzle.text),
        SessionEvent::PuzzleUpdated(None) => {}
        SessionEvent::SubmittingChanged(true) => println!("Checking..."),
        SessionEvent::SubmittingChanged(false) => {}
        SessionEvent::FeedbackChanged { message, correctness } => {
            if !message.is_empty() {
                let mark = match correctness {
                    Correctness::Correct => "✔",
                    Correctness::Incorrect => "✘",
                    Correctness::Unknown => "·",
                };
                println!("{} {}", mark, message);
            }
        }
        SessionEvent::ScoreChanged { score, delta: 0 } => println!("Score: {}", score),
        SessionEvent::ScoreChanged { score, delta } => {
            println!("Score: {} ({:+})", score, delta)
        }
        SessionEvent::HintRevealed(hint) => println!("Hint: {}", hint),
        SessionEvent::AchievementToastShown(achievement) => println!(
            "{} Achievement unlocked: {} — {}",
            achievement.icon, achievement.name, achievement.description
        ),
        SessionEvent::AchievementToastLeaving(_)
        | SessionEvent::AchievementToastDismissed(_) => {}
        SessionEvent::UnlockedAchievementsChanged(_) => {}
        SessionEvent::StatsChanged(_) => {}
        SessionEvent::SoundEnabledChanged(enabled) => {
            println!("Sound {}", if *enabled { "on" } else { "off" })
        }
        SessionEvent::DifficultyChanged(difficulty) => println!("Difficulty: {}", difficulty),
        SessionEvent::CategoryChanged(category) => println!("Category: {}", category),
    }
}

fn print_stats(controller: &SessionController) {
    let stats = controller.stats();
    println!(
        "Attempted {} · solved {} · streak {} · high score {}",
        stats.puzzles_attempted, stats.puzzles_solved, stats.win_streak, stats.high_score
    );
    let mut unlocked: Vec<_> = controller.unlocked().iter().cloned().collect();
    unlocked.sort();
    if unlocked.is_empty() {
        println!("No achievements yet.");
    } else {
        println!("Achievements: {}", unlocked.join(", "));
    }
}
