use log::{trace, warn};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::game::achievement_rules;
use crate::game::progress::{self, keys, SavedProgress};
use crate::game::scheduler::{Scheduler, Timing};
use crate::game::toast_queue::ToastQueue;
use crate::model::{
    Achievement, Category, Correctness, Difficulty, GameStats, Puzzle, RoundState,
    SessionCommand, SessionEvent,
};
use crate::source::{PuzzleSource, PuzzleSourceError};
use crate::storage::PersistenceStore;
use crate::ui::{AudioCuePlayer, HapticPattern, HapticTrigger, SoundCue};

pub const CORRECT_FEEDBACK: &str = "Correct! You have a brilliant mind.";
pub const INCORRECT_FEEDBACK: &str = "Not quite. Give it another thought!";
pub const FETCH_ERROR_FEEDBACK: &str = "Failed to load a new puzzle. Please try again.";

/// Single authority over round lifecycle, scoring, achievements, and
/// persistence triggers. Consumes `SessionCommand`s, emits `SessionEvent`s.
pub struct SessionController {
    round: RoundState,
    loading: bool,
    score: u32,
    stats: GameStats,
    unlocked: HashSet<String>,
    sound_enabled: bool,
    difficulty: Difficulty,
    category: Category,
    toasts: ToastQueue,
    // monotonic guard: deliveries for a superseded fetch are discarded
    fetch_seq: u64,
    // bumped on every feedback change so a stale auto-clear can tell it was
    // superseded
    feedback_seq: u64,
    timing: Timing,
    scheduler: Rc<Scheduler>,
    puzzle_source: Rc<dyn PuzzleSource>,
    store: Box<dyn PersistenceStore>,
    audio: Rc<dyn AudioCuePlayer>,
    haptics: Rc<dyn HapticTrigger>,
    event_emitter: EventEmitter<SessionEvent>,
    command_subscription: Option<Unsubscriber<SessionCommand>>,
    weak_self: Weak<RefCell<Self>>,
}

impl Destroyable for SessionController {
    fn destroy(&mut self) {
        if let Some(subscription) = self.command_subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl SessionController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        command_observer: EventObserver<SessionCommand>,
        event_emitter: EventEmitter<SessionEvent>,
        puzzle_source: Rc<dyn PuzzleSource>,
        store: Box<dyn PersistenceStore>,
        audio: Rc<dyn AudioCuePlayer>,
        haptics: Rc<dyn HapticTrigger>,
        scheduler: Rc<Scheduler>,
        timing: Timing,
    ) -> Rc<RefCell<Self>> {
        let saved = SavedProgress::load(store.as_ref());
        let controller = Self {
            round: RoundState::fresh(),
            loading: false,
            score: saved.score,
            stats: saved.stats,
            unlocked: saved.unlocked,
            sound_enabled: saved.sound_enabled,
            difficulty: saved.difficulty,
            category: saved.category,
            toasts: ToastQueue::new(),
            fetch_seq: 0,
            feedback_seq: 0,
            timing,
            scheduler,
            puzzle_source,
            store,
            audio,
            haptics,
            event_emitter,
            command_subscription: None,
            weak_self: Weak::new(),
        };
        let refcell = Rc::new(RefCell::new(controller));
        refcell.borrow_mut().weak_self = Rc::downgrade(&refcell);
        SessionController::wire_subscription(refcell.clone(), command_observer);
        refcell
    }

    fn wire_subscription(
        controller: Rc<RefCell<Self>>,
        command_observer: EventObserver<SessionCommand>,
    ) {
        let handler = controller.clone();
        let subscription = command_observer.subscribe(move |command| {
            let mut controller = handler.borrow_mut();
            controller.handle_command(command.clone());
        });
        controller.borrow_mut().command_subscription = Some(subscription);
    }

    fn handle_command(&mut self, command: SessionCommand) {
        trace!(target: "session", "Handling command: {:?}", command);
        match command {
            SessionCommand::InitDisplay => self.emit_full_state(),
            SessionCommand::NewRound => {
                self.play_cue(SoundCue::Click);
                self.haptics.trigger(HapticPattern::Click);
                self.start_new_round();
            }
            SessionCommand::SubmitGuess(guess) => self.submit_guess(guess),
            SessionCommand::RequestHint => self.request_hint(),
            SessionCommand::ChangeDifficulty(difficulty) => self.change_difficulty(difficulty),
            SessionCommand::ChangeCategory(category) => self.change_category(category),
            SessionCommand::ResetProgress { confirmed } => self.reset_progress(confirmed),
            SessionCommand::SetSoundEnabled(enabled) => self.set_sound_enabled(enabled),
        }
    }

    fn emit_full_state(&mut self) {
        self.emit(SessionEvent::ScoreChanged {
            score: self.score,
            delta: 0,
        });
        self.emit(SessionEvent::StatsChanged(self.stats));
        self.emit(SessionEvent::UnlockedAchievementsChanged(self.unlocked.clone()));
        self.emit(SessionEvent::SoundEnabledChanged(self.sound_enabled));
        self.emit(SessionEvent::DifficultyChanged(self.difficulty));
        self.emit(SessionEvent::CategoryChanged(self.category));
        self.emit(SessionEvent::PuzzleUpdated(self.round.puzzle.clone()));
        self.emit(SessionEvent::LoadingChanged(self.loading));
    }

    fn start_new_round(&mut self) {
        self.round = RoundState::fresh();
        self.loading = true;
        self.fetch_seq += 1;
        let seq = self.fetch_seq;

        self.emit(SessionEvent::PuzzleUpdated(None));
        self.emit(SessionEvent::LoadingChanged(true));
        self.play_cue(SoundCue::Loading);

        trace!(target: "session", "Fetching puzzle (seq {}, round {})", seq, self.round.round_id);
        let result = self.puzzle_source.fetch(self.difficulty, self.category);
        self.deliver_puzzle(seq, result);
    }

    /// Accepts a fetched puzzle (or failure) for the fetch identified by
    /// `seq`. A delivery for anything but the latest issued fetch is stale
    /// and is discarded, so a slow response can never clobber a newer round.
    pub fn deliver_puzzle(&mut self, seq: u64, result: Result<Puzzle, PuzzleSourceError>) {
        if seq != self.fetch_seq {
            trace!(
                target: "session",
                "Discarding stale puzzle delivery (seq {}, latest {})",
                seq,
                self.fetch_seq
            );
            return;
        }
        self.loading = false;
        match result {
            Ok(puzzle) => {
                self.round.puzzle = Some(puzzle.clone());
                self.stats.record_attempt();
                self.persist_stats();
                self.emit(SessionEvent::StatsChanged(self.stats));
                self.set_feedback(String::new(), Correctness::Unknown);
                self.emit(SessionEvent::PuzzleUpdated(Some(puzzle)));
            }
            Err(e) => {
                warn!(target: "session", "Puzzle generation failed: {}", e);
                self.round.puzzle = None;
                self.set_feedback(FETCH_ERROR_FEEDBACK.to_string(), Correctness::Incorrect);
                self.schedule_feedback_clear();
            }
        }
        self.emit(SessionEvent::LoadingChanged(false));
    }

    fn submit_guess(&mut self, raw_guess: String) {
        if raw_guess.trim().is_empty()
            || self.round.puzzle.is_none()
            || self.round.is_solved()
            || self.round.submitting
        {
            return;
        }

        self.round.submitting = true;
        self.emit(SessionEvent::SubmittingChanged(true));

        let weak = self.weak_self.clone();
        self.scheduler
            .schedule_in(self.timing.verification_delay, move || {
                if let Some(controller) = weak.upgrade() {
                    controller.borrow_mut().finish_submission(raw_guess);
                }
            });
    }

    fn finish_submission(&mut self, raw_guess: String) {
        match self.round.puzzle.clone() {
            Some(puzzle) if puzzle.matches_guess(&raw_guess) => self.handle_correct_guess(),
            Some(_) => self.handle_incorrect_guess(),
            // round was replaced while the verification pause was pending
            None => {}
        }
        self.round.submitting = false;
        self.emit(SessionEvent::SubmittingChanged(false));
    }

    fn handle_correct_guess(&mut self) {
        self.set_feedback(CORRECT_FEEDBACK.to_string(), Correctness::Correct);
        self.play_cue(SoundCue::Correct);
        self.haptics.trigger(HapticPattern::Success);

        let base = self.difficulty.base_points();
        let earned = if self.round.hint_taken { base } else { base * 2 };
        self.score += earned;
        self.persist_score();
        self.emit(SessionEvent::ScoreChanged {
            score: self.score,
            delta: earned as i32,
        });

        self.stats.record_solve(self.score);
        self.persist_stats();
        self.emit(SessionEvent::StatsChanged(self.stats));

        let newly = achievement_rules::newly_unlocked(
            &self.stats,
            self.score,
            self.round.hint_taken,
            &self.unlocked,
        );
        if !newly.is_empty() {
            for achievement in &newly {
                self.unlocked.insert(achievement.id.to_string());
            }
            progress::persist(self.store.as_mut(), keys::ACHIEVEMENTS, &self.unlocked);
            self.emit(SessionEvent::UnlockedAchievementsChanged(self.unlocked.clone()));
            self.play_cue(SoundCue::Achievement);
            self.haptics.trigger(HapticPattern::Success);
            self.enqueue_toasts(newly);
        }
    }

    fn handle_incorrect_guess(&mut self) {
        self.set_feedback(INCORRECT_FEEDBACK.to_string(), Correctness::Incorrect);
        self.play_cue(SoundCue::Incorrect);
        self.haptics.trigger(HapticPattern::Error);
        self.stats.record_miss();
        self.persist_stats();
        self.emit(SessionEvent::StatsChanged(self.stats));
    }

    fn request_hint(&mut self) {
        if self.round.hint_taken || self.round.is_solved() || self.score == 0 {
            return;
        }
        let hint = match self.round.puzzle.as_ref().filter(|p| p.has_hint()) {
            Some(puzzle) => puzzle.hint.clone(),
            None => return,
        };

        self.round.hint_shown = true;
        self.round.hint_taken = true;
        self.score = self.score.saturating_sub(1);
        self.persist_score();
        self.emit(SessionEvent::ScoreChanged {
            score: self.score,
            delta: -1,
        });
        self.emit(SessionEvent::HintRevealed(hint));
        self.play_cue(SoundCue::Hint);
        self.haptics.trigger(HapticPattern::Hint);
    }

    fn reset_progress(&mut self, confirmed: bool) {
        if !confirmed {
            trace!(target: "session", "Ignoring unconfirmed progress reset");
            return;
        }
        self.play_cue(SoundCue::Click);
        self.haptics.trigger(HapticPattern::Click);

        self.score = 0;
        self.stats = GameStats::default();
        self.unlocked.clear();
        self.persist_score();
        self.persist_stats();
        progress::persist(self.store.as_mut(), keys::ACHIEVEMENTS, &self.unlocked);

        self.emit(SessionEvent::ScoreChanged {
            score: 0,
            delta: 0,
        });
        self.emit(SessionEvent::StatsChanged(self.stats));
        self.emit(SessionEvent::UnlockedAchievementsChanged(self.unlocked.clone()));

        self.start_new_round();
    }

    fn change_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.difficulty || self.loading {
            return;
        }
        self.play_cue(SoundCue::Click);
        self.haptics.trigger(HapticPattern::Click);
        self.difficulty = difficulty;
        progress::persist(self.store.as_mut(), keys::DIFFICULTY, &self.difficulty);
        self.emit(SessionEvent::DifficultyChanged(difficulty));
        self.start_new_round();
    }

    fn change_category(&mut self, category: Category) {
        if category == self.category || self.loading {
            return;
        }
        self.play_cue(SoundCue::Click);
        self.haptics.trigger(HapticPattern::Click);
        self.category = category;
        progress::persist(self.store.as_mut(), keys::CATEGORY, &self.category);
        self.emit(SessionEvent::CategoryChanged(category));
        self.start_new_round();
    }

    fn set_sound_enabled(&mut self, enabled: bool) {
        if enabled == self.sound_enabled {
            return;
        }
        self.sound_enabled = enabled;
        progress::persist(self.store.as_mut(), keys::SOUND_ENABLED, &self.sound_enabled);
        self.emit(SessionEvent::SoundEnabledChanged(enabled));
    }

    fn set_feedback(&mut self, message: String, correctness: Correctness) {
        self.feedback_seq += 1;
        self.round.feedback = message.clone();
        self.round.correctness = correctness;
        self.emit(SessionEvent::FeedbackChanged {
            message,
            correctness,
        });
    }

    fn schedule_feedback_clear(&mut self) {
        let seq = self.feedback_seq;
        let weak = self.weak_self.clone();
        self.scheduler
            .schedule_in(self.timing.error_clear_delay, move || {
                if let Some(controller) = weak.upgrade() {
                    let mut controller = controller.borrow_mut();
                    // a newer message superseded this one; leave it alone
                    if controller.feedback_seq == seq {
                        controller.set_feedback(String::new(), Correctness::Unknown);
                    }
                }
            });
    }

    fn enqueue_toasts(&mut self, achievements: Vec<Achievement>) {
        for achievement in achievements {
            if let Some(shown) = self.toasts.push(achievement) {
                self.begin_toast_display(shown);
            }
        }
    }

    fn begin_toast_display(&mut self, toast: Achievement) {
        self.emit(SessionEvent::AchievementToastShown(toast));
        let weak = self.weak_self.clone();
        self.scheduler.schedule_in(self.timing.toast_visible, move || {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().begin_toast_exit();
            }
        });
    }

    fn begin_toast_exit(&mut self) {
        if let Some(leaving) = self.toasts.begin_exit() {
            self.emit(SessionEvent::AchievementToastLeaving(leaving));
            let weak = self.weak_self.clone();
            self.scheduler.schedule_in(self.timing.toast_exit, move || {
                if let Some(controller) = weak.upgrade() {
                    controller.borrow_mut().finish_toast_exit();
                }
            });
        }
    }

    fn finish_toast_exit(&mut self) {
        let (dismissed, next) = self.toasts.finish_exit();
        if let Some(toast) = dismissed {
            self.emit(SessionEvent::AchievementToastDismissed(toast));
        }
        if let Some(toast) = next {
            self.begin_toast_display(toast);
        }
    }

    fn play_cue(&self, cue: SoundCue) {
        if !self.sound_enabled {
            return;
        }
        let audio = Rc::clone(&self.audio);
        self.scheduler.schedule_in(self.timing.audio_priming, move || {
            audio.play(cue);
        });
    }

    fn persist_score(&mut self) {
        progress::persist(self.store.as_mut(), keys::SCORE, &self.score);
    }

    fn persist_stats(&mut self) {
        progress::persist(self.store.as_mut(), keys::STATS, &self.stats);
    }

    fn emit(&self, event: SessionEvent) {
        self.event_emitter.emit(&event);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn unlocked(&self) -> &HashSet<String> {
        &self.unlocked
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The achievement toast currently on screen, if any.
    pub fn toast_head(&self) -> Option<Achievement> {
        self.toasts.head()
    }
}
