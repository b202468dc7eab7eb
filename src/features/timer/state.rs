//! Timer state, commands and events.

use serde::{Deserialize, Serialize};

use super::session::{BreakKind, SessionDraft, SessionType, StudySession};

/// Cumulative counters, persisted across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStats {
    /// Completed focus sessions.
    pub session_count: u32,
    /// Minutes of completed focus sessions.
    pub total_study_time: u32,
}

/// Lifecycle position of the active countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    /// No countdown.
    Idle,
    /// Counting down.
    Running,
    /// Countdown frozen.
    Paused,
}

impl std::fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
        }
    }
}

/// In-memory timer state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Seconds remaining in the active session.
    pub time_left: u32,
    /// Whether a countdown is active at all.
    pub is_running: bool,
    /// Whether the active countdown is frozen.
    pub is_paused: bool,
    /// The active session, if any.
    pub current_session: Option<StudySession>,
    /// Completed focus sessions.
    pub session_count: u32,
    /// Minutes of completed focus sessions.
    pub total_study_time: u32,
}

impl TimerState {
    /// Idle state with `time_left` seeded from the focus duration.
    #[must_use]
    pub fn idle(focus_minutes: u32, stats: TimerStats) -> Self {
        Self {
            time_left: focus_minutes.saturating_mul(60),
            is_running: false,
            is_paused: false,
            current_session: None,
            session_count: stats.session_count,
            total_study_time: stats.total_study_time,
        }
    }

    /// The persisted counters.
    #[must_use]
    pub const fn stats(&self) -> TimerStats {
        TimerStats {
            session_count: self.session_count,
            total_study_time: self.total_study_time,
        }
    }

    /// Lifecycle position derived from the flags.
    #[must_use]
    pub const fn status(&self) -> TimerStatus {
        match (self.is_running, self.is_paused) {
            (false, _) => TimerStatus::Idle,
            (true, false) => TimerStatus::Running,
            (true, true) => TimerStatus::Paused,
        }
    }

    /// Whether the countdown should advance on the next tick.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.is_running && !self.is_paused
    }

    /// Fraction of the active session elapsed, 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let Some(session) = &self.current_session else {
            return 0.0;
        };
        let total = session.duration_seconds();
        if total == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.time_left.min(total)) / f64::from(total))
    }
}

/// A request to change timer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCommand {
    /// Begin a new session, replacing any active one.
    Start(SessionDraft),
    /// Flip the pause flag.
    TogglePause,
    /// Abandon the active session without recording it.
    Stop,
    /// Complete the active session now.
    Skip,
    /// Begin a configured break.
    StartBreak(BreakKind),
    /// One second elapsed.
    Tick,
}

/// Something that happened while applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A session began counting down.
    Started {
        /// Session id.
        id: String,
        /// Interval kind.
        session_type: SessionType,
        /// Seconds on the clock.
        time_left: u32,
    },
    /// An active session was dropped because another one started.
    Replaced {
        /// Id of the discarded session.
        id: String,
    },
    /// The pause flag changed.
    PauseToggled {
        /// New value of the flag.
        paused: bool,
    },
    /// The countdown advanced.
    Ticked {
        /// Seconds remaining.
        time_left: u32,
    },
    /// The active session was abandoned.
    Stopped {
        /// Id of the discarded session, if one was active.
        id: Option<String>,
    },
    /// A session completed and was recorded.
    Completed(StudySession),
}
