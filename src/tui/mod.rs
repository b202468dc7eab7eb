//! Terminal dashboard for studytimer.
//!
//! Shows the live countdown, today's totals and recent sessions. Built with
//! ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::TimerError;
use crate::features::timer::{StudyTimer, TimerDriver};

/// Run the dashboard until the user quits.
///
/// An active session is abandoned on quit, as with `stop`.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or run.
pub fn run(timer: StudyTimer) -> Result<(), TimerError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| TimerError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TimerError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TimerError::Config(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(TimerDriver::new(timer));
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TimerError> {
    loop {
        app.on_tick()?;

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TimerError::Config(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::StartFocus => app.start_focus()?,
                event::Action::StartBreak => app.start_break()?,
                event::Action::TogglePause => app.toggle_pause()?,
                event::Action::Stop => app.stop()?,
                event::Action::Skip => app.skip()?,
                event::Action::Rate(quality) => app.rate_selected(quality)?,
            }
        }
    }

    Ok(())
}
