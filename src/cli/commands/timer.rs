//! Foreground session commands.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::{BreakArg, OutputFormat, StartArgs};
use crate::error::TimerError;
use crate::features::timer::{
    format_minutes, SessionDraft, StudySession, StudyTimer, TimerCommand, TimerDriver,
    TimerEvent,
};
use crate::output::{format_countdown_line, to_json};

/// How often the live countdown redraws.
const REDRAW: Duration = Duration::from_millis(250);

/// Run a session in the foreground until it completes.
///
/// # Errors
///
/// Returns an error if the timer cannot be opened or driven.
pub fn start(ctx: &Context, args: StartArgs) -> Result<String, TimerError> {
    run_foreground(ctx, ctx.open_timer()?, TimerCommand::Start(draft_from(args)))
}

fn draft_from(args: StartArgs) -> SessionDraft {
    let mut draft = SessionDraft {
        subject: args.subject,
        duration: args.duration,
        session_type: args.session_type,
        notes: args.notes,
        ..SessionDraft::default()
    };
    if let Some(technique) = args.technique {
        draft = draft.with_technique(technique);
    }
    draft
}

/// Run a break in the foreground until it completes.
///
/// # Errors
///
/// Returns an error if the timer cannot be opened or driven.
pub fn take_break(ctx: &Context, kind: BreakArg) -> Result<String, TimerError> {
    let timer = ctx.open_timer()?;
    let kind = kind.resolve(timer.suggested_break());
    run_foreground(ctx, timer, TimerCommand::StartBreak(kind))
}

/// Ask for notification permission and report the outcome.
///
/// # Errors
///
/// Returns an error if the timer cannot be opened.
pub fn notify_permission(ctx: &Context) -> Result<String, TimerError> {
    let mut timer = ctx.open_timer()?;
    let granted = timer.request_notification_permission();

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "granted": granted })),
        OutputFormat::Pretty => Ok(if granted {
            "Notifications enabled.".green().to_string()
        } else {
            "Notifications are not available.".yellow().to_string()
        }),
    }
}

fn run_foreground(
    ctx: &Context,
    mut timer: StudyTimer,
    command: TimerCommand,
) -> Result<String, TimerError> {
    if timer.options().notifications_enabled {
        timer.request_notification_permission();
    }

    let live = ctx.format == OutputFormat::Pretty && io::stdout().is_terminal();
    let mut driver = TimerDriver::new(timer);
    let mut completed = None;

    for event in driver.execute(command)? {
        match event {
            TimerEvent::Started { session_type, .. } if live => {
                println!("{}", format!("{} started", session_type.display_name()).green());
            }
            TimerEvent::Completed(session) => completed = Some(session),
            _ => {}
        }
    }

    while completed.is_none() && driver.has_ticker() {
        if live {
            let mut stdout = io::stdout().lock();
            write!(
                stdout,
                "\r{}\x1b[K",
                format_countdown_line(driver.timer().state())
            )?;
            stdout.flush()?;
        }

        completed = driver
            .wait(REDRAW)?
            .into_iter()
            .find_map(|event| match event {
                TimerEvent::Completed(session) => Some(session),
                _ => None,
            });
    }

    if live {
        println!();
    }

    let Some(session) = completed else {
        return Ok(String::new());
    };

    match ctx.format {
        OutputFormat::Json => to_json(&session),
        OutputFormat::Pretty => Ok(completion_message(&driver.into_inner(), &session)),
    }
}

fn completion_message(timer: &StudyTimer, session: &StudySession) -> String {
    let mut lines = vec![format!(
        "{} {} complete: {} ({})",
        "✓".green(),
        session.session_type.display_name(),
        session.subject.bold(),
        format_minutes(session.duration)
    )];

    if session.session_type.is_break() {
        lines.push("   Ready to focus again? Run 'studytimer start'".dimmed().to_string());
    } else {
        lines.push(format!(
            "   Next up: {} ('studytimer break')",
            timer.suggested_break().session_type().display_name()
        ));
        lines.push(
            format!("   Rate it: studytimer rate {} <1-5>", session.id)
                .dimmed()
                .to_string(),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Paths};
    use crate::features::timer::SessionType;
    use tempfile::TempDir;

    fn context(dir: &TempDir, format: OutputFormat) -> Context {
        let mut config = Config::default();
        config.timer.sound_enabled = false;
        config.timer.notifications_enabled = false;
        Context {
            paths: Paths::with_root(dir.path().to_path_buf()),
            config,
            format,
        }
    }

    #[test]
    fn test_draft_carries_technique() {
        let draft = draft_from(StartArgs {
            subject: Some("Logic".to_string()),
            duration: Some(50),
            session_type: None,
            technique: Some("flowtime".to_string()),
            notes: None,
        });
        assert_eq!(draft.subject.as_deref(), Some("Logic"));
        assert_eq!(draft.duration, Some(50));
        assert_eq!(draft.technique.as_deref(), Some("flowtime"));
    }

    #[test]
    fn test_completion_message_for_focus() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let mut timer = context(&dir, OutputFormat::Pretty).open_timer().unwrap();
        timer.start_session(SessionDraft::focus("Logic"));
        let session = timer
            .skip_session()
            .into_iter()
            .find_map(|e| match e {
                TimerEvent::Completed(s) => Some(s),
                _ => None,
            })
            .unwrap();

        let message = completion_message(&timer, &session);
        assert!(message.contains("Focus complete: Logic (25 minutes)"));
        assert!(message.contains(&format!("studytimer rate {}", session.id)));
        assert!(message.contains("Next up: Short Break"));
    }

    #[test]
    fn test_notify_permission_json() {
        let dir = TempDir::new().unwrap();
        let out = notify_permission(&context(&dir, OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["granted"].is_boolean());
    }

    #[test]
    fn test_break_resolves_against_history() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, OutputFormat::Json);
        let timer = ctx.open_timer().unwrap();
        let kind = BreakArg::Auto.resolve(timer.suggested_break());
        assert_eq!(kind.session_type(), SessionType::ShortBreak);
    }
}
