//! Timer configuration.

use serde::{Deserialize, Serialize};

use super::session::BreakKind;

/// Durations and signal switches for a [`StudyTimer`](super::StudyTimer).
///
/// `long_break_interval`, `auto_start_breaks` and `auto_start_focus` are
/// policy hints for callers; the timer itself never chains sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerOptions {
    /// Focus session length in minutes.
    pub focus_duration: u32,
    /// Short break length in minutes.
    pub short_break_duration: u32,
    /// Long break length in minutes.
    pub long_break_duration: u32,
    /// Focus sessions between long breaks.
    pub long_break_interval: u32,
    /// Start a break automatically after a focus session.
    pub auto_start_breaks: bool,
    /// Start focus automatically after a break.
    pub auto_start_focus: bool,
    /// Play tones on start and completion.
    pub sound_enabled: bool,
    /// Show a system notification on completion.
    pub notifications_enabled: bool,
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            focus_duration: 25,
            short_break_duration: 5,
            long_break_duration: 15,
            long_break_interval: 4,
            auto_start_breaks: false,
            auto_start_focus: false,
            sound_enabled: true,
            notifications_enabled: true,
        }
    }
}

impl TimerOptions {
    /// Configured length of a break, in minutes.
    #[must_use]
    pub const fn break_duration(&self, kind: BreakKind) -> u32 {
        match kind {
            BreakKind::Short => self.short_break_duration,
            BreakKind::Long => self.long_break_duration,
        }
    }

    /// The break due after `completed_focus_sessions` focus sessions.
    #[must_use]
    pub const fn break_after(&self, completed_focus_sessions: u32) -> BreakKind {
        if self.long_break_interval > 0
            && completed_focus_sessions > 0
            && completed_focus_sessions % self.long_break_interval == 0
        {
            BreakKind::Long
        } else {
            BreakKind::Short
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_duration() {
        let options = TimerOptions::default();
        assert_eq!(options.break_duration(BreakKind::Short), 5);
        assert_eq!(options.break_duration(BreakKind::Long), 15);
    }

    #[test]
    fn test_break_after() {
        let options = TimerOptions::default();
        assert_eq!(options.break_after(0), BreakKind::Short);
        assert_eq!(options.break_after(3), BreakKind::Short);
        assert_eq!(options.break_after(4), BreakKind::Long);
        assert_eq!(options.break_after(8), BreakKind::Long);

        let never_long = TimerOptions {
            long_break_interval: 0,
            ..TimerOptions::default()
        };
        assert_eq!(never_long.break_after(4), BreakKind::Short);
    }
}
