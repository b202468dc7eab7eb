use colored::Colorize;

use crate::features::timer::{
    format_minutes, format_time, render_progress_bar, SessionType, StudySession, TimerState,
    TimerStatus, TodayStats,
};

use super::StatsReport;

fn type_label(session_type: SessionType) -> colored::ColoredString {
    match session_type {
        SessionType::Focus => session_type.display_name().red(),
        SessionType::ShortBreak => session_type.display_name().green(),
        SessionType::LongBreak => session_type.display_name().blue(),
        SessionType::Custom => session_type.display_name().magenta(),
    }
}

fn quality_stars(quality: Option<u8>) -> String {
    quality.map_or_else(String::new, |q| {
        let q = usize::from(q.min(5));
        format!("{}{}", "★".repeat(q), "☆".repeat(5 - q))
    })
}

/// Format session history as a list, newest first
pub fn format_history_pretty(sessions: &[&StudySession], days: u32) -> String {
    let title = format!("Sessions, last {days} day{}", if days == 1 { "" } else { "s" });

    if sessions.is_empty() {
        return format!("{title} (0)\n  No completed sessions");
    }

    let mut output = format!("{title} ({})\n", sessions.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions.iter().rev() {
        let mut line = format!(
            "{}  {:<11}  {}  {}",
            session.start_time_local().format("%Y-%m-%d %H:%M").to_string().dimmed(),
            type_label(session.session_type),
            format!("{:>3}m", session.duration).yellow(),
            session.subject.bold(),
        );

        let stars = quality_stars(session.quality);
        if !stars.is_empty() {
            line.push_str(&format!("  {}", stars.yellow()));
        }
        line.push_str(&format!("  {}", session.id.dimmed()));

        output.push_str(&line);
        output.push('\n');

        if let Some(notes) = &session.notes {
            output.push_str(&format!("    {}\n", notes.italic()));
        }
    }

    output
}

/// Format today's focus totals
pub fn format_today_pretty(stats: &TodayStats) -> String {
    let mut output = format!("{}\n", "Today".bold());
    output.push_str(&format!(
        "  {}: {}\n",
        "Focus time".dimmed(),
        format_minutes(stats.total_minutes).cyan()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Sessions".dimmed(),
        stats.session_count
    ));

    let quality = if stats.average_quality > 0.0 {
        format!("{:.1} / 5", stats.average_quality)
    } else {
        "not rated".to_string()
    };
    output.push_str(&format!("  {}: {}\n", "Avg quality".dimmed(), quality));

    output
}

/// Format lifetime counters with today's totals
pub fn format_stats_pretty(report: &StatsReport<'_>) -> String {
    let mut output = format!("{}\n", "Study stats".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "  {}: {}\n",
        "Focus sessions".dimmed(),
        report.lifetime.session_count.to_string().cyan()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Study time".dimmed(),
        format_minutes(report.lifetime.total_study_time).cyan()
    ));
    output.push_str(&format!(
        "  {}: {} ({}, {} sessions)\n",
        "Today".dimmed(),
        format_minutes(report.today.total_minutes),
        if report.today.average_quality > 0.0 {
            format!("quality {:.1}", report.today.average_quality)
        } else {
            "unrated".to_string()
        },
        report.today.session_count
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Next break".dimmed(),
        report.suggested_break.session_type().display_name().green()
    ));

    if let Some(last) = report.last_session {
        output.push_str(&format!(
            "  {}: {} {} ({})\n",
            "Last session".dimmed(),
            type_label(last.session_type),
            last.subject.bold(),
            last.start_time_local().format("%Y-%m-%d %H:%M")
        ));
    }

    output
}

/// Format a single session's details
pub fn format_session_pretty(session: &StudySession) -> String {
    let mut output = format!(
        "{} {}\n",
        type_label(session.session_type),
        session.subject.bold()
    );
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), session.id));
    output.push_str(&format!(
        "  {}: {}\n",
        "Duration".dimmed(),
        format_minutes(session.duration)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Started".dimmed(),
        session.start_time_local().format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!("  {}: {}\n", "Technique".dimmed(), session.technique));

    if session.quality.is_some() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Quality".dimmed(),
            quality_stars(session.quality).yellow()
        ));
    }
    if let Some(notes) = &session.notes {
        output.push_str(&format!("  {}: {}\n", "Notes".dimmed(), notes));
    }

    output
}

/// One-line countdown status, redrawn in place by the foreground runner
pub fn format_countdown_line(state: &TimerState) -> String {
    let Some(session) = &state.current_session else {
        return format!("{} {}", "■".dimmed(), format_time(state.time_left));
    };

    let marker = match state.status() {
        TimerStatus::Running => "▶".green(),
        TimerStatus::Paused => "⏸".yellow(),
        TimerStatus::Idle => "■".dimmed(),
    };

    format!(
        "{} {} {}  {}  {}",
        marker,
        type_label(session.session_type),
        format_time(state.time_left).bold(),
        render_progress_bar(state.progress(), 30),
        session.subject.dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::timer::{BreakKind, SessionDraft, TimerStats};
    use chrono::{TimeZone, Utc};

    fn session(subject: &str, quality: Option<u8>) -> StudySession {
        let start = Utc.with_ymd_and_hms(2026, 7, 15, 9, 0, 0).unwrap();
        let mut s = StudySession::from_draft(
            start.timestamp_millis().to_string(),
            SessionDraft::focus(subject),
            25,
            start,
        );
        s.complete(start + chrono::Duration::minutes(25));
        s.quality = quality;
        s
    }

    #[test]
    fn test_history_empty() {
        colored::control::set_override(false);
        let out = format_history_pretty(&[], 7);
        assert!(out.contains("last 7 days"));
        assert!(out.contains("No completed sessions"));
    }

    #[test]
    fn test_history_lists_sessions() {
        colored::control::set_override(false);
        let a = session("Geometry", Some(3));
        let out = format_history_pretty(&[&a], 1);
        assert!(out.contains("last 1 day (1)"));
        assert!(out.contains("Geometry"));
        assert!(out.contains("★★★☆☆"));
        assert!(out.contains(&a.id));
    }

    #[test]
    fn test_today_unrated() {
        colored::control::set_override(false);
        let out = format_today_pretty(&TodayStats {
            total_minutes: 75,
            session_count: 3,
            average_quality: 0.0,
        });
        assert!(out.contains("1 hour, 15 minutes"));
        assert!(out.contains("not rated"));
    }

    #[test]
    fn test_stats_report() {
        colored::control::set_override(false);
        let last = session("Essay", None);
        let report = StatsReport {
            lifetime: TimerStats {
                session_count: 8,
                total_study_time: 200,
            },
            today: TodayStats::default(),
            suggested_break: BreakKind::Long,
            last_session: Some(&last),
        };
        let out = format_stats_pretty(&report);
        assert!(out.contains("3 hours, 20 minutes"));
        assert!(out.contains("Long Break"));
        assert!(out.contains("Essay"));
    }

    #[test]
    fn test_countdown_line() {
        colored::control::set_override(false);
        let mut state = TimerState::idle(25, TimerStats::default());
        assert!(format_countdown_line(&state).contains("25:00"));

        state.current_session = Some(session("Music", None));
        state.is_running = true;
        state.time_left = 90;
        let line = format_countdown_line(&state);
        assert!(line.contains("01:30"));
        assert!(line.contains("Music"));
    }
}
