//! Queries over completed sessions.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::session::{SessionType, StudySession};

/// Default window for history queries, in days.
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// Aggregates for focus sessions completed today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    /// Minutes of completed focus.
    pub total_minutes: u32,
    /// Number of completed focus sessions.
    pub session_count: u32,
    /// Mean quality of rated sessions, 0.0 when none are rated.
    pub average_quality: f64,
}

/// Completed sessions that started at or after `now - days`.
///
/// The iterator borrows `sessions` and is evaluated lazily.
pub fn sessions_within(
    sessions: &[StudySession],
    now: DateTime<Utc>,
    days: u32,
) -> impl Iterator<Item = &StudySession> {
    let cutoff = now - Duration::days(i64::from(days));
    sessions
        .iter()
        .filter(move |s| s.completed && s.start_time >= cutoff)
}

/// `[midnight, next midnight)` of `date` in the local timezone, as UTC.
#[must_use]
pub fn local_day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start_of = |d: NaiveDate| {
        let midnight = d.and_hms_opt(0, 0, 0).unwrap_or_default();
        Local
            .from_local_datetime(&midnight)
            .earliest()
            .map_or_else(
                || DateTime::from_naive_utc_and_offset(midnight, Utc),
                |t| t.with_timezone(&Utc),
            )
    };
    let next = date.succ_opt().unwrap_or(date);
    (start_of(date), start_of(next))
}

/// Totals for completed focus sessions started on the local day of `now`.
#[must_use]
pub fn todays_stats(sessions: &[StudySession], now: DateTime<Utc>) -> TodayStats {
    let (start, end) = local_day_bounds(now.with_timezone(&Local).date_naive());

    let mut stats = TodayStats::default();
    let mut quality_sum = 0u32;

    for session in sessions.iter().filter(|s| {
        s.completed
            && s.session_type == SessionType::Focus
            && s.start_time >= start
            && s.start_time < end
    }) {
        stats.total_minutes += session.duration;
        stats.session_count += 1;
        // unrated sessions count as zero
        quality_sum += session.quality.map_or(0, u32::from);
    }

    if stats.session_count > 0 {
        stats.average_quality = f64::from(quality_sum) / f64::from(stats.session_count);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::timer::session::SessionDraft;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn session(start: DateTime<Utc>, session_type: SessionType, minutes: u32) -> StudySession {
        let mut s = StudySession::from_draft(
            start.timestamp_millis().to_string(),
            SessionDraft::default()
                .with_type(session_type)
                .with_duration(minutes),
            25,
            start,
        );
        s.complete(start + Duration::minutes(i64::from(minutes)));
        s
    }

    #[test]
    fn test_history_window_inclusive_lower_bound() {
        let now = local(2026, 7, 15, 12, 0);
        let sessions = vec![
            session(now - Duration::days(7), SessionType::Focus, 25),
            session(now - Duration::days(7) - Duration::seconds(1), SessionType::Focus, 25),
            session(now - Duration::days(1), SessionType::ShortBreak, 5),
        ];

        let within: Vec<_> = sessions_within(&sessions, now, 7).collect();
        assert_eq!(within.len(), 2);
        assert_eq!(within[0].start_time, now - Duration::days(7));
        assert_eq!(within[1].session_type, SessionType::ShortBreak);
    }

    #[test]
    fn test_history_skips_incomplete() {
        let now = local(2026, 7, 15, 12, 0);
        let mut open = session(now, SessionType::Focus, 25);
        open.completed = false;
        open.end_time = None;

        assert_eq!(sessions_within(&[open], now, 7).count(), 0);
    }

    #[test]
    fn test_todays_stats_scoping() {
        let now = local(2026, 7, 15, 12, 0);
        let mut rated = session(local(2026, 7, 15, 0, 1), SessionType::Focus, 25);
        rated.quality = Some(4);
        let mut rated_again = session(local(2026, 7, 15, 11, 0), SessionType::Focus, 50);
        rated_again.quality = Some(5);

        let sessions = vec![
            rated,
            rated_again,
            session(local(2026, 7, 15, 10, 0), SessionType::Focus, 10),
            session(local(2026, 7, 15, 9, 0), SessionType::ShortBreak, 5),
            session(local(2026, 7, 14, 23, 59), SessionType::Focus, 25),
            session(local(2026, 7, 16, 0, 0), SessionType::Focus, 25),
        ];

        let stats = todays_stats(&sessions, now);
        assert_eq!(stats.session_count, 3);
        assert_eq!(stats.total_minutes, 85);
        assert!((stats.average_quality - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_todays_stats_unrated_only() {
        let now = local(2026, 7, 15, 12, 0);
        let sessions = vec![
            session(local(2026, 7, 15, 9, 0), SessionType::Focus, 25),
            session(local(2026, 7, 15, 10, 0), SessionType::Focus, 25),
        ];

        let stats = todays_stats(&sessions, now);
        assert_eq!(stats.session_count, 2);
        assert_eq!(stats.average_quality, 0.0);
    }

    #[test]
    fn test_todays_stats_empty() {
        let stats = todays_stats(&[], local(2026, 7, 15, 12, 0));
        assert_eq!(stats, TodayStats::default());
        assert_eq!(stats.average_quality, 0.0);
    }

    #[test]
    fn test_local_day_bounds_span_one_day() {
        let (start, end) = local_day_bounds(NaiveDate::from_ymd_opt(2026, 7, 15).unwrap());
        assert_eq!(end - start, Duration::hours(24));
        assert_eq!(start, local(2026, 7, 15, 0, 0));
    }
}
