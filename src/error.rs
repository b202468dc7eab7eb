//! Error types for studytimer.
//!
//! The timer core never surfaces errors to its callers; these are returned by
//! the storage, configuration and CLI layers.

use thiserror::Error;

/// Errors produced by studytimer.
#[derive(Debug, Error)]
pub enum TimerError {
    /// Configuration could not be read, parsed or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// The local database failed.
    #[error("database error: {0}")]
    Database(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A requested item does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// User input was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<rusqlite::Error> for TimerError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}
