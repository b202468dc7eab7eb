//! Wall-clock driving for a [`StudyTimer`].
//!
//! The driver keeps at most one [`Ticker`] alive, and only while the timer
//! is running and not paused. Starting a session always replaces the ticker
//! so a superseded countdown can never deliver a tick to its successor.

use std::time::Duration;

use super::engine::StudyTimer;
use super::session::StudySession;
use super::state::{TimerCommand, TimerEvent};
use super::ticker::{Ticker, TICK_PERIOD};
use crate::error::TimerError;

/// Owns a timer and its tick source.
pub struct TimerDriver {
    timer: StudyTimer,
    ticker: Option<Ticker>,
    period: Duration,
}

impl TimerDriver {
    /// Drive `timer` with one tick per second.
    #[must_use]
    pub fn new(timer: StudyTimer) -> Self {
        Self::with_period(timer, TICK_PERIOD)
    }

    /// Drive `timer` with a custom tick period.
    #[must_use]
    pub fn with_period(timer: StudyTimer, period: Duration) -> Self {
        Self {
            timer,
            ticker: None,
            period,
        }
    }

    /// The driven timer.
    #[must_use]
    pub const fn timer(&self) -> &StudyTimer {
        &self.timer
    }

    /// Whether a tick source is currently alive.
    #[must_use]
    pub const fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    /// Apply a command and bring the tick source in line with the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a tick thread cannot be spawned.
    pub fn execute(&mut self, command: TimerCommand) -> Result<Vec<TimerEvent>, TimerError> {
        let restart = matches!(
            command,
            TimerCommand::Start(_) | TimerCommand::StartBreak(_)
        );
        let events = self.timer.dispatch(command);
        self.sync(restart)?;
        Ok(events)
    }

    /// Apply every tick that has arrived, without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if a tick thread cannot be spawned.
    pub fn poll(&mut self) -> Result<Vec<TimerEvent>, TimerError> {
        let pending = self.ticker.as_ref().map_or(0, Ticker::drain);
        self.apply_ticks(pending)
    }

    /// Block up to `timeout` for a tick, then apply everything pending.
    ///
    /// Returns immediately with no events when nothing is ticking.
    ///
    /// # Errors
    ///
    /// Returns an error if a tick thread cannot be spawned.
    pub fn wait(&mut self, timeout: Duration) -> Result<Vec<TimerEvent>, TimerError> {
        let Some(ticker) = &self.ticker else {
            return Ok(Vec::new());
        };
        if !ticker.recv_timeout(timeout) {
            return Ok(Vec::new());
        }
        let pending = 1 + ticker.drain();
        self.apply_ticks(pending)
    }

    /// Rate or annotate a completed session. Never affects the countdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown, the rating is out of
    /// range, or the store fails.
    pub fn annotate_session(
        &mut self,
        id: &str,
        quality: Option<u8>,
        notes: Option<String>,
    ) -> Result<&StudySession, TimerError> {
        self.timer.annotate_session(id, quality, notes)
    }

    /// Stop driving and hand the timer back.
    #[must_use]
    pub fn into_inner(self) -> StudyTimer {
        self.timer
    }

    fn apply_ticks(&mut self, count: u32) -> Result<Vec<TimerEvent>, TimerError> {
        let mut events = Vec::new();
        for _ in 0..count {
            events.extend(self.timer.dispatch(TimerCommand::Tick));
        }
        self.sync(false)?;
        Ok(events)
    }

    fn sync(&mut self, restart: bool) -> Result<(), TimerError> {
        if !self.timer.state().is_ticking() {
            self.ticker = None;
        } else if restart || self.ticker.is_none() {
            // cancel before spawning so two tickers never overlap
            self.ticker = None;
            self.ticker = Some(Ticker::spawn(self.period)?);
        }
        Ok(())
    }
}
