use log::debug;

/// Distinct vibration patterns for different feedback types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    Success,
    Error,
    Hint,
    Click,
}

impl HapticPattern {
    /// Pulse/pause lengths in milliseconds, for backends that drive a real
    /// vibration motor.
    pub fn pulses_ms(&self) -> &'static [u64] {
        match self {
            // a short, crisp pulse for a correct answer
            HapticPattern::Success => &[100],
            // two short bursts for an incorrect answer
            HapticPattern::Error => &[75, 50, 75],
            // a longer single pulse for revealing a hint
            HapticPattern::Hint => &[200],
            // a sharp tap for button clicks
            HapticPattern::Click => &[50],
        }
    }
}

/// Fire-and-forget haptic feedback. Unsupported hardware is not an error;
/// implementations swallow failures and log them.
pub trait HapticTrigger {
    fn trigger(&self, pattern: HapticPattern);
}

/// Ignores every pattern. Used in tests and on hardware without a motor.
pub struct NullHaptics;

impl HapticTrigger for NullHaptics {
    fn trigger(&self, _pattern: HapticPattern) {}
}

/// Logs patterns instead of vibrating.
pub struct LoggingHaptics;

impl HapticTrigger for LoggingHaptics {
    fn trigger(&self, pattern: HapticPattern) {
        debug!(target: "haptics", "Pattern: {:?} ({:?}ms)", pattern, pattern.pulses_ms());
    }
}
