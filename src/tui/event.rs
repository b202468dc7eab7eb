//! Event handling for the dashboard.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::TimerError;
use crate::tui::app::App;

const HELP: &str = "s:focus | b:break | p:pause | x:stop | n:skip | j/k:select | 1-5:rate | q:quit";

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start a focus session.
    StartFocus,
    /// Start the suggested break.
    StartBreak,
    /// Pause or resume.
    TogglePause,
    /// Abandon the active session.
    Stop,
    /// Complete the active session now.
    Skip,
    /// Rate the selected session.
    Rate(u8),
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. Waits at most
/// 100ms so the countdown keeps redrawing.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, TimerError> {
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| TimerError::Config(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| TimerError::Config(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') => Some(Action::StartFocus),
        KeyCode::Char('b') => Some(Action::StartBreak),
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('x') => Some(Action::Stop),
        KeyCode::Char('n') => Some(Action::Skip),
        KeyCode::Char(c @ '1'..='5') => c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Action::Rate),
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            None
        }
        KeyCode::Char('?') => {
            app.status = Some(HELP.to_string());
            None
        }
        _ => None,
    };

    Ok(action)
}

/// Default status bar text.
#[must_use]
pub const fn help_text() -> &'static str {
    HELP
}
