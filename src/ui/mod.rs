pub mod audio;
pub mod console;
pub mod haptics;

pub use audio::{AudioCuePlayer, LoggingAudioPlayer, NullAudioPlayer, SoundCue};
pub use haptics::{HapticPattern, HapticTrigger, LoggingHaptics, NullHaptics};
