//! Study session records.
//!
//! A [`StudySession`] is created when a countdown starts and becomes
//! immutable once completed. Only completed sessions are kept in history.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Kind of timed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    /// Concentrated study; counts toward study totals.
    Focus,
    /// Short pause between focus sessions.
    ShortBreak,
    /// Longer pause after several focus sessions.
    LongBreak,
    /// Anything else the caller wants to time.
    Custom,
}

impl SessionType {
    /// Parse a session type from user input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "focus" | "f" => Some(Self::Focus),
            "short-break" | "short" | "sb" => Some(Self::ShortBreak),
            "long-break" | "long" | "lb" => Some(Self::LongBreak),
            "custom" | "c" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Stable identifier used in storage and JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::ShortBreak => "short-break",
            Self::LongBreak => "long-break",
            Self::Custom => "custom",
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
            Self::Custom => "Custom",
        }
    }

    /// Check if this is a break type.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which configured break length to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    /// Short break duration.
    Short,
    /// Long break duration.
    Long,
}

impl BreakKind {
    /// The session type a break of this kind is recorded as.
    #[must_use]
    pub const fn session_type(self) -> SessionType {
        match self {
            Self::Short => SessionType::ShortBreak,
            Self::Long => SessionType::LongBreak,
        }
    }
}

/// Partial session data supplied by the caller when starting a countdown.
///
/// Unset fields fall back to defaults when the session is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDraft {
    /// Free-text label for what is being studied.
    pub subject: Option<String>,
    /// Planned length in minutes.
    pub duration: Option<u32>,
    /// Interval kind; defaults to focus.
    pub session_type: Option<SessionType>,
    /// Time-management technique label.
    pub technique: Option<String>,
    /// Optional notes.
    pub notes: Option<String>,
}

impl SessionDraft {
    /// A focus draft for `subject`.
    #[must_use]
    pub fn focus(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            session_type: Some(SessionType::Focus),
            ..Self::default()
        }
    }

    /// Set the planned duration in minutes.
    #[must_use]
    pub const fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Set the session type.
    #[must_use]
    pub const fn with_type(mut self, session_type: SessionType) -> Self {
        self.session_type = Some(session_type);
        self
    }

    /// Set the technique label.
    #[must_use]
    pub fn with_technique(mut self, technique: impl Into<String>) -> Self {
        self.technique = Some(technique.into());
        self
    }
}

/// Default subject for sessions started without one.
pub const DEFAULT_SUBJECT: &str = "Study";

/// Default technique label.
pub const DEFAULT_TECHNIQUE: &str = "pomodoro";

/// One timed interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    /// Unique identifier derived from the creation time.
    pub id: String,
    /// What was studied.
    pub subject: String,
    /// Planned length in minutes.
    pub duration: u32,
    /// When the session was created.
    pub start_time: DateTime<Utc>,
    /// When the session completed; set once, together with `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Interval kind.
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Whether the countdown ran out or was skipped.
    pub completed: bool,
    /// 1-5 rating supplied after the fact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    /// Time-management technique label.
    pub technique: String,
    /// Optional notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StudySession {
    /// Build a running session from a draft.
    #[must_use]
    pub fn from_draft(
        id: String,
        draft: SessionDraft,
        default_duration: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            subject: draft
                .subject
                .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            duration: draft.duration.unwrap_or(default_duration),
            start_time: now,
            end_time: None,
            session_type: draft.session_type.unwrap_or(SessionType::Focus),
            completed: false,
            quality: None,
            technique: draft
                .technique
                .unwrap_or_else(|| DEFAULT_TECHNIQUE.to_string()),
            notes: draft.notes,
        }
    }

    /// Mark the session completed at `at`.
    ///
    /// Returns false, leaving the record untouched, if it was already
    /// completed.
    pub fn complete(&mut self, at: DateTime<Utc>) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.end_time = Some(at);
        true
    }

    /// Planned length in seconds.
    #[must_use]
    pub const fn duration_seconds(&self) -> u32 {
        self.duration.saturating_mul(60)
    }

    /// Record a 1-5 quality rating.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the rating is outside 1-5.
    pub fn rate(&mut self, quality: u8) -> Result<(), TimerError> {
        if !(1..=5).contains(&quality) {
            return Err(TimerError::InvalidInput(format!(
                "quality must be between 1 and 5, got {quality}"
            )));
        }
        self.quality = Some(quality);
        Ok(())
    }

    /// Start time in the local timezone.
    #[must_use]
    pub fn start_time_local(&self) -> DateTime<Local> {
        self.start_time.with_timezone(&Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_from_draft_defaults() {
        let session = StudySession::from_draft("1".into(), SessionDraft::default(), 25, at(9));

        assert_eq!(session.subject, DEFAULT_SUBJECT);
        assert_eq!(session.duration, 25);
        assert_eq!(session.session_type, SessionType::Focus);
        assert_eq!(session.technique, DEFAULT_TECHNIQUE);
        assert!(!session.completed);
        assert!(session.end_time.is_none());
    }

    #[test]
    fn test_complete_sets_end_time_once() {
        let mut session =
            StudySession::from_draft("1".into(), SessionDraft::focus("Maths"), 25, at(9));

        assert!(session.complete(at(10)));
        assert!(!session.complete(at(11)));

        assert!(session.completed);
        assert_eq!(session.end_time, Some(at(10)));
    }

    #[test]
    fn test_rate_bounds() {
        let mut session =
            StudySession::from_draft("1".into(), SessionDraft::default(), 25, at(9));

        assert!(session.rate(0).is_err());
        assert!(session.rate(6).is_err());
        session.rate(4).unwrap();
        assert_eq!(session.quality, Some(4));
    }

    #[test]
    fn test_serialized_field_names() {
        let mut session = StudySession::from_draft(
            "1752570000000".into(),
            SessionDraft::focus("Physics").with_type(SessionType::ShortBreak),
            5,
            at(9),
        );
        session.complete(at(10));

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["type"], "short-break");
        assert_eq!(value["startTime"], "2026-07-15T09:00:00Z");
        assert_eq!(value["endTime"], "2026-07-15T10:00:00Z");
        assert_eq!(value["completed"], true);
        assert!(value.get("quality").is_none());
    }

    #[test]
    fn test_session_type_parse() {
        assert_eq!(SessionType::parse("focus"), Some(SessionType::Focus));
        assert_eq!(SessionType::parse("short"), Some(SessionType::ShortBreak));
        assert_eq!(SessionType::parse("LONG-BREAK"), Some(SessionType::LongBreak));
        assert_eq!(SessionType::parse("custom"), Some(SessionType::Custom));
        assert_eq!(SessionType::parse("nap"), None);
    }

    #[test]
    fn test_break_kind_session_type() {
        assert!(BreakKind::Short.session_type().is_break());
        assert_eq!(BreakKind::Long.session_type(), SessionType::LongBreak);
        assert!(!SessionType::Focus.is_break());
    }
}
