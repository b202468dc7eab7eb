//! Output formatting for studytimer.
//!
//! This module provides formatters for displaying sessions and stats in
//! various formats.

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::TimerError;
use crate::features::timer::{BreakKind, StudySession, TimerStats, TodayStats};

pub use json::*;
pub use pretty::*;

/// Everything `stats` reports.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport<'a> {
    /// Persisted lifetime counters.
    pub lifetime: TimerStats,
    /// Totals for the current local day.
    pub today: TodayStats,
    /// Break the long-break interval calls for next.
    pub suggested_break: BreakKind,
    /// Most recently completed session.
    pub last_session: Option<&'a StudySession>,
}

/// Format session history based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_history(
    sessions: &[&StudySession],
    days: u32,
    format: OutputFormat,
) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(sessions, days)),
        OutputFormat::Json => format_history_json(sessions, days),
    }
}

/// Format today's totals based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_today(stats: &TodayStats, format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_today_pretty(stats)),
        OutputFormat::Json => format_today_json(stats),
    }
}

/// Format the stats report based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_stats(report: &StatsReport<'_>, format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(report)),
        OutputFormat::Json => format_stats_json(report),
    }
}

/// Format a single session based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_session(session: &StudySession, format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_session_pretty(session)),
        OutputFormat::Json => to_json(session),
    }
}
