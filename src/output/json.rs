//! JSON output formatting for studytimer.

use serde::Serialize;
use serde_json::json;

use crate::error::TimerError;
use crate::features::timer::{StudySession, TodayStats};

use super::StatsReport;

/// Format session history as JSON
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_history_json(sessions: &[&StudySession], days: u32) -> Result<String, TimerError> {
    let output = json!({
        "days": days,
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format today's totals as JSON
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_today_json(stats: &TodayStats) -> Result<String, TimerError> {
    to_json(stats)
}

/// Format the stats report as JSON
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_stats_json(report: &StatsReport<'_>) -> Result<String, TimerError> {
    to_json(report)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TimerError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::timer::{BreakKind, SessionDraft, TimerStats};
    use chrono::{TimeZone, Utc};

    fn session() -> StudySession {
        let start = Utc.with_ymd_and_hms(2026, 7, 15, 9, 0, 0).unwrap();
        let mut s = StudySession::from_draft(
            "1784106000000".to_string(),
            SessionDraft::focus("Physics"),
            25,
            start,
        );
        s.complete(start + chrono::Duration::minutes(25));
        s
    }

    #[test]
    fn test_history_json_envelope() {
        let s = session();
        let json = format_history_json(&[&s], 7).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["days"], 7);
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["subject"], "Physics");
        assert_eq!(value["items"][0]["type"], "focus");
        assert_eq!(value["items"][0]["startTime"], "2026-07-15T09:00:00Z");
    }

    #[test]
    fn test_today_json_camel_case() {
        let json = format_today_json(&TodayStats {
            total_minutes: 50,
            session_count: 2,
            average_quality: 4.5,
        })
        .unwrap();
        assert!(json.contains("\"totalMinutes\": 50"));
        assert!(json.contains("\"averageQuality\": 4.5"));
    }

    #[test]
    fn test_stats_json() {
        let s = session();
        let report = StatsReport {
            lifetime: TimerStats {
                session_count: 4,
                total_study_time: 100,
            },
            today: TodayStats::default(),
            suggested_break: BreakKind::Long,
            last_session: Some(&s),
        };
        let value: serde_json::Value =
            serde_json::from_str(&format_stats_json(&report).unwrap()).unwrap();

        assert_eq!(value["lifetime"]["sessionCount"], 4);
        assert_eq!(value["suggestedBreak"], "long");
        assert_eq!(value["lastSession"]["id"], "1784106000000");
    }
}
