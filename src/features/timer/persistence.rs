//! Durable history and counters.
//!
//! History and counters live under two independent keys so a corrupt value
//! under one key never costs the other.

use tracing::{debug, warn};

use super::session::StudySession;
use super::state::TimerStats;
use crate::error::TimerError;
use crate::storage::LocalStorage;

/// Key holding the JSON array of completed sessions.
pub const SESSIONS_KEY: &str = "studySessions";

/// Key holding the `{sessionCount, totalStudyTime}` object.
pub const STATS_KEY: &str = "studyStats";

/// Reads and writes timer data through a [`LocalStorage`].
pub struct SessionStore {
    storage: Box<dyn LocalStorage>,
}

impl SessionStore {
    /// Wrap a key-value store.
    #[must_use]
    pub fn new(storage: Box<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// Read stored history.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the value is not valid JSON.
    pub fn read_sessions(&self) -> Result<Vec<StudySession>, TimerError> {
        match self.storage.get_item(SESSIONS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Read stored counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the value is not valid JSON.
    pub fn read_stats(&self) -> Result<TimerStats, TimerError> {
        match self.storage.get_item(STATS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(TimerStats::default()),
        }
    }

    /// Load history and counters, falling back to empty values on failure.
    #[must_use]
    pub fn load(&self) -> (Vec<StudySession>, TimerStats) {
        let sessions = self.read_sessions().unwrap_or_else(|e| {
            warn!(key = SESSIONS_KEY, error = %e, "ignoring unreadable session history");
            Vec::new()
        });
        let stats = self.read_stats().unwrap_or_else(|e| {
            warn!(key = STATS_KEY, error = %e, "ignoring unreadable timer stats");
            TimerStats::default()
        });
        debug!(
            sessions = sessions.len(),
            session_count = stats.session_count,
            "loaded timer data"
        );
        (sessions, stats)
    }

    /// Write history and counters.
    ///
    /// # Errors
    ///
    /// Returns the first serialization or store failure.
    pub fn write(&self, sessions: &[StudySession], stats: TimerStats) -> Result<(), TimerError> {
        self.storage
            .set_item(SESSIONS_KEY, &serde_json::to_string(sessions)?)?;
        self.storage
            .set_item(STATS_KEY, &serde_json::to_string(&stats)?)?;
        Ok(())
    }

    /// Write history and counters, logging instead of failing.
    pub fn save(&self, sessions: &[StudySession], stats: TimerStats) {
        if let Err(e) = self.write(sessions, stats) {
            warn!(error = %e, "failed to persist timer data");
        }
    }

    /// Delete all stored timer data.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn clear(&self) -> Result<(), TimerError> {
        self.storage.remove_item(SESSIONS_KEY)?;
        self.storage.remove_item(STATS_KEY)
    }
}
