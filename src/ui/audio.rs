use log::debug;

/// Named audio events the session can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Correct,
    Incorrect,
    Loading,
    Hint,
    Click,
    Achievement,
}

/// Fire-and-forget cue playback. Implementations swallow playback failures
/// and log them; a failed cue never reaches the user as an error.
pub trait AudioCuePlayer {
    fn play(&self, cue: SoundCue);
}

/// Drops every cue. Used in tests and wherever no audio backend exists.
pub struct NullAudioPlayer;

impl AudioCuePlayer for NullAudioPlayer {
    fn play(&self, _cue: SoundCue) {}
}

/// Logs cues instead of playing them; the stand-in backend for headless and
/// console builds.
pub struct LoggingAudioPlayer;

impl AudioCuePlayer for LoggingAudioPlayer {
    fn play(&self, cue: SoundCue) {
        debug!(target: "audio", "Cue: {:?}", cue);
    }
}
