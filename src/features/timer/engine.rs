//! The study timer state machine.
//!
//! ```text
//! IDLE --start--> RUNNING <--toggle pause--> PAUSED
//! RUNNING --time_left hits 0--> COMPLETED --record--> IDLE
//! RUNNING/PAUSED --skip--> COMPLETED --record--> IDLE
//! RUNNING/PAUSED --stop--> IDLE (discarded)
//! ```
//!
//! Every mutation goes through [`StudyTimer::dispatch`]. After each command
//! the timer checks for `time_left == 0` with a session still attached and
//! records that completion exactly once.

use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::history::{self, TodayStats};
use super::options::TimerOptions;
use super::persistence::SessionStore;
use super::session::{BreakKind, SessionDraft, SessionType, StudySession, DEFAULT_TECHNIQUE};
use super::state::{TimerCommand, TimerEvent, TimerState};
use crate::error::TimerError;
use crate::features::signals::{Chime, Cue, Notifier, NullNotifier, Permission, SilentChime};
use crate::storage::LocalStorage;

/// A single countdown with durable history.
pub struct StudyTimer {
    options: TimerOptions,
    state: TimerState,
    sessions: Vec<StudySession>,
    store: SessionStore,
    chime: Box<dyn Chime>,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
    last_id: i64,
}

impl StudyTimer {
    /// Create a timer, loading history and counters from `storage`.
    ///
    /// Unreadable stored data is logged and ignored.
    #[must_use]
    pub fn new(options: TimerOptions, storage: Box<dyn LocalStorage>) -> Self {
        let store = SessionStore::new(storage);
        let (sessions, stats) = store.load();
        let last_id = sessions
            .iter()
            .filter_map(|s| s.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            state: TimerState::idle(options.focus_duration, stats),
            options,
            sessions,
            store,
            chime: Box::new(SilentChime),
            notifier: Box::new(NullNotifier),
            clock: Box::new(SystemClock),
            last_id,
        }
    }

    /// Use `chime` for audio cues.
    #[must_use]
    pub fn with_chime(mut self, chime: Box<dyn Chime>) -> Self {
        self.chime = chime;
        self
    }

    /// Use `notifier` for completion notifications.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Use `clock` as the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &TimerState {
        &self.state
    }

    /// Configuration in use.
    #[must_use]
    pub const fn options(&self) -> &TimerOptions {
        &self.options
    }

    /// All completed sessions, oldest first.
    #[must_use]
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    /// Apply one command and report what happened.
    pub fn dispatch(&mut self, command: TimerCommand) -> Vec<TimerEvent> {
        let mut events = Vec::new();

        match command {
            TimerCommand::Start(draft) => self.begin(draft, &mut events),
            TimerCommand::StartBreak(kind) => {
                let session_type = kind.session_type();
                let draft = SessionDraft {
                    subject: Some(session_type.display_name().to_string()),
                    duration: Some(self.options.break_duration(kind)),
                    session_type: Some(session_type),
                    technique: Some(DEFAULT_TECHNIQUE.to_string()),
                    notes: None,
                };
                self.begin(draft, &mut events);
            }
            TimerCommand::TogglePause => {
                // flips even while idle; start and stop reset it
                self.state.is_paused = !self.state.is_paused;
                debug!(paused = self.state.is_paused, "pause toggled");
                events.push(TimerEvent::PauseToggled {
                    paused: self.state.is_paused,
                });
            }
            TimerCommand::Stop => {
                let discarded = self.state.current_session.take().map(|s| s.id);
                self.state.time_left = self.options.focus_duration.saturating_mul(60);
                self.state.is_running = false;
                self.state.is_paused = false;
                debug!(id = ?discarded, "timer stopped");
                events.push(TimerEvent::Stopped { id: discarded });
            }
            TimerCommand::Skip => {
                if self.state.current_session.is_some() {
                    self.state.time_left = 0;
                    self.state.is_running = false;
                    self.state.is_paused = false;
                }
            }
            TimerCommand::Tick => {
                if self.state.is_ticking() {
                    if self.state.time_left <= 1 {
                        self.state.time_left = 0;
                        self.state.is_running = false;
                    } else {
                        self.state.time_left -= 1;
                    }
                    events.push(TimerEvent::Ticked {
                        time_left: self.state.time_left,
                    });
                }
            }
        }

        self.observe_completion(&mut events);
        events
    }

    /// Begin a session described by `draft`.
    pub fn start_session(&mut self, draft: SessionDraft) -> Vec<TimerEvent> {
        self.dispatch(TimerCommand::Start(draft))
    }

    /// Flip the pause flag.
    pub fn pause_timer(&mut self) -> Vec<TimerEvent> {
        self.dispatch(TimerCommand::TogglePause)
    }

    /// Abandon the active session without recording it.
    pub fn stop_timer(&mut self) -> Vec<TimerEvent> {
        self.dispatch(TimerCommand::Stop)
    }

    /// Complete the active session immediately.
    pub fn skip_session(&mut self) -> Vec<TimerEvent> {
        self.dispatch(TimerCommand::Skip)
    }

    /// Begin a configured break.
    pub fn start_break(&mut self, kind: BreakKind) -> Vec<TimerEvent> {
        self.dispatch(TimerCommand::StartBreak(kind))
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        self.dispatch(TimerCommand::Tick)
    }

    /// Ask the notifier for permission. Returns whether it is granted.
    pub fn request_notification_permission(&mut self) -> bool {
        let permission = if self.notifier.permission() == Permission::Default {
            self.notifier.request_permission()
        } else {
            self.notifier.permission()
        };
        debug!(%permission, "notification permission");
        permission.is_granted()
    }

    /// Completed sessions from the trailing `days` days.
    pub fn session_history(&self, days: u32) -> impl Iterator<Item = &StudySession> {
        history::sessions_within(&self.sessions, self.clock.now(), days)
    }

    /// Focus totals for the current local day.
    #[must_use]
    pub fn todays_stats(&self) -> TodayStats {
        history::todays_stats(&self.sessions, self.clock.now())
    }

    /// The break the long-break interval calls for next.
    #[must_use]
    pub const fn suggested_break(&self) -> BreakKind {
        self.options.break_after(self.state.session_count)
    }

    /// Attach a rating and/or notes to a completed session and persist.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and `InvalidInput` for a rating
    /// outside 1-5.
    pub fn annotate_session(
        &mut self,
        id: &str,
        quality: Option<u8>,
        notes: Option<String>,
    ) -> Result<&StudySession, TimerError> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| TimerError::NotFound(format!("session {id}")))?;

        let session = &mut self.sessions[index];
        if let Some(quality) = quality {
            session.rate(quality)?;
        }
        if notes.is_some() {
            session.notes = notes;
        }

        self.store.write(&self.sessions, self.state.stats())?;
        Ok(&self.sessions[index])
    }

    /// Forget all history and counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    pub fn clear_history(&mut self) -> Result<(), TimerError> {
        self.store.clear()?;
        self.sessions.clear();
        self.state.session_count = 0;
        self.state.total_study_time = 0;
        info!("cleared session history");
        Ok(())
    }

    fn begin(&mut self, draft: SessionDraft, events: &mut Vec<TimerEvent>) {
        if let Some(previous) = self.state.current_session.take() {
            warn!(id = %previous.id, "replacing active session; it will not be recorded");
            events.push(TimerEvent::Replaced { id: previous.id });
        }

        let now = self.clock.now();
        let id = self.next_id(now.timestamp_millis());
        let session = StudySession::from_draft(id, draft, self.options.focus_duration, now);

        self.state.time_left = session.duration_seconds();
        self.state.is_running = true;
        self.state.is_paused = false;

        debug!(
            id = %session.id,
            session_type = session.session_type.as_str(),
            minutes = session.duration,
            "session started"
        );
        events.push(TimerEvent::Started {
            id: session.id.clone(),
            session_type: session.session_type,
            time_left: self.state.time_left,
        });
        self.state.current_session = Some(session);

        if self.options.sound_enabled {
            self.chime.play(Cue::Start);
        }
    }

    fn next_id(&mut self, millis: i64) -> String {
        let id = millis.max(self.last_id + 1);
        self.last_id = id;
        id.to_string()
    }

    fn observe_completion(&mut self, events: &mut Vec<TimerEvent>) {
        if self.state.time_left != 0 {
            return;
        }
        let Some(mut session) = self.state.current_session.take() else {
            return;
        };

        self.state.is_running = false;
        self.state.is_paused = false;
        session.complete(self.clock.now());

        if session.session_type == SessionType::Focus {
            self.state.session_count += 1;
            self.state.total_study_time += session.duration;
        }

        self.sessions.push(session.clone());
        self.store.save(&self.sessions, self.state.stats());

        info!(
            id = %session.id,
            session_type = session.session_type.as_str(),
            minutes = session.duration,
            "session completed"
        );

        self.signal_completion(&session);
        events.push(TimerEvent::Completed(session));
    }

    fn signal_completion(&self, session: &StudySession) {
        let is_break = session.session_type.is_break();

        if self.options.sound_enabled {
            self.chime.play(if is_break {
                Cue::BreakComplete
            } else {
                Cue::FocusComplete
            });
        }

        if self.options.notifications_enabled && self.notifier.permission().is_granted() {
            let (title, body) = if is_break {
                (
                    format!("{} over", session.session_type.display_name()),
                    "Ready to focus again?".to_string(),
                )
            } else {
                (
                    format!("{} session complete!", session.session_type.display_name()),
                    format!("Great work on {}. Time for a break.", session.subject),
                )
            };
            self.notifier.notify(&title, &body);
        }
    }
}
