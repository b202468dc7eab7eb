//! Application state for the dashboard.

use crate::error::TimerError;
use crate::features::timer::{
    BreakKind, SessionDraft, StudySession, TimerCommand, TimerDriver, TimerEvent, TimerState,
    TodayStats,
};

/// How many recent sessions the dashboard lists.
const RECENT_LIMIT: usize = 50;

/// Application state.
pub struct App {
    driver: TimerDriver,
    /// Currently selected row in the recent-sessions list.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app around a driven timer.
    #[must_use]
    pub fn new(driver: TimerDriver) -> Self {
        Self {
            driver,
            selected: 0,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Current timer state.
    #[must_use]
    pub const fn state(&self) -> &TimerState {
        self.driver.timer().state()
    }

    /// Totals for today.
    #[must_use]
    pub fn today(&self) -> TodayStats {
        self.driver.timer().todays_stats()
    }

    /// The break the interval calls for next.
    #[must_use]
    pub const fn suggested_break(&self) -> BreakKind {
        self.driver.timer().suggested_break()
    }

    /// Completed sessions, newest first.
    #[must_use]
    pub fn recent(&self) -> Vec<&StudySession> {
        self.driver
            .timer()
            .sessions()
            .iter()
            .rev()
            .take(RECENT_LIMIT)
            .collect()
    }

    /// Apply ticks that arrived since the last frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick source cannot be restarted.
    pub fn on_tick(&mut self) -> Result<(), TimerError> {
        let events = self.driver.poll()?;
        self.handle(events)
    }

    /// Start a focus session with configured defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick source cannot be started.
    pub fn start_focus(&mut self) -> Result<(), TimerError> {
        self.execute(TimerCommand::Start(SessionDraft::default()))
    }

    /// Start whichever break the interval suggests.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick source cannot be started.
    pub fn start_break(&mut self) -> Result<(), TimerError> {
        let kind = self.suggested_break();
        self.execute(TimerCommand::StartBreak(kind))
    }

    /// Pause or resume.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick source cannot be restarted.
    pub fn toggle_pause(&mut self) -> Result<(), TimerError> {
        self.execute(TimerCommand::TogglePause)
    }

    /// Abandon the active session.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick source cannot be updated.
    pub fn stop(&mut self) -> Result<(), TimerError> {
        self.execute(TimerCommand::Stop)
    }

    /// Complete the active session now.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick source cannot be updated.
    pub fn skip(&mut self) -> Result<(), TimerError> {
        self.execute(TimerCommand::Skip)
    }

    /// Rate the selected session.
    ///
    /// # Errors
    ///
    /// Returns an error if the rating cannot be saved.
    pub fn rate_selected(&mut self, quality: u8) -> Result<(), TimerError> {
        let Some(id) = self.recent().get(self.selected).map(|s| s.id.clone()) else {
            return Ok(());
        };
        let session = self.driver.annotate_session(&id, Some(quality), None)?;
        self.status = Some(format!("Rated {}: {quality}/5", session.subject));
        Ok(())
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let len = self.recent().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    fn execute(&mut self, command: TimerCommand) -> Result<(), TimerError> {
        let events = self.driver.execute(command)?;
        self.handle(events)
    }

    fn handle(&mut self, events: Vec<TimerEvent>) -> Result<(), TimerError> {
        for event in events {
            match event {
                TimerEvent::Started { session_type, .. } => {
                    self.status = Some(format!("{} started", session_type.display_name()));
                }
                TimerEvent::Replaced { .. } => {
                    self.status = Some("Previous session discarded".to_string());
                }
                TimerEvent::PauseToggled { paused } => {
                    self.status = Some(if paused { "Paused" } else { "Resumed" }.to_string());
                }
                TimerEvent::Stopped { .. } => {
                    self.status = Some("Stopped".to_string());
                }
                TimerEvent::Completed(session) => {
                    self.selected = 0;
                    self.status = Some(format!(
                        "{} complete: {}",
                        session.session_type.display_name(),
                        session.subject
                    ));
                    self.follow_up(&session)?;
                }
                TimerEvent::Ticked { .. } => {}
            }
        }
        Ok(())
    }

    /// Chain the next session when the auto-start options ask for it.
    fn follow_up(&mut self, finished: &StudySession) -> Result<(), TimerError> {
        let options = self.driver.timer().options();
        let (auto_focus, auto_breaks) = (options.auto_start_focus, options.auto_start_breaks);
        if finished.session_type.is_break() {
            if auto_focus {
                self.start_focus()?;
            }
        } else if auto_breaks {
            self.start_break()?;
        }
        Ok(())
    }
}
