//! History and stats commands.

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::OutputFormat;
use crate::error::TimerError;
use crate::features::timer::StudySession;
use crate::output::{format_history, format_session, format_stats, format_today, to_json, StatsReport};

/// List completed sessions from the last `days` days.
///
/// # Errors
///
/// Returns an error if the timer cannot be opened or output formatting fails.
pub fn history(ctx: &Context, days: u32) -> Result<String, TimerError> {
    let timer = ctx.open_timer()?;
    let sessions: Vec<&StudySession> = timer.session_history(days).collect();
    format_history(&sessions, days, ctx.format)
}

/// Show today's focus totals.
///
/// # Errors
///
/// Returns an error if the timer cannot be opened or output formatting fails.
pub fn today(ctx: &Context) -> Result<String, TimerError> {
    let timer = ctx.open_timer()?;
    format_today(&timer.todays_stats(), ctx.format)
}

/// Show lifetime counters, today's totals and the next break.
///
/// # Errors
///
/// Returns an error if the timer cannot be opened or output formatting fails.
pub fn stats(ctx: &Context) -> Result<String, TimerError> {
    let timer = ctx.open_timer()?;
    let report = StatsReport {
        lifetime: timer.state().stats(),
        today: timer.todays_stats(),
        suggested_break: timer.suggested_break(),
        last_session: timer.sessions().last(),
    };
    format_stats(&report, ctx.format)
}

/// Rate a completed session.
///
/// # Errors
///
/// Returns an error if the session does not exist or cannot be saved.
pub fn rate(
    ctx: &Context,
    id: &str,
    quality: u8,
    notes: Option<String>,
) -> Result<String, TimerError> {
    let mut timer = ctx.open_timer()?;
    let session = timer.annotate_session(id, Some(quality), notes)?;
    format_session(session, ctx.format)
}

/// Delete all history and counters.
///
/// # Errors
///
/// Returns an error without `force`, or if the store cannot be cleared.
pub fn clear(ctx: &Context, force: bool) -> Result<String, TimerError> {
    if !force {
        return Err(TimerError::InvalidInput(
            "This will delete all study session history.\nUse --force to confirm.".to_string(),
        ));
    }

    let mut timer = ctx.open_timer()?;
    let removed = timer.sessions().len();
    timer.clear_history()?;

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "cleared": removed })),
        OutputFormat::Pretty => Ok(format!(
            "{} Cleared {removed} session{}.",
            "✓".green(),
            if removed == 1 { "" } else { "s" }
        )),
    }
}
