//! `SQLite` database connection.
//!
//! The database is stored at `<root>/studytimer.db` and holds a single
//! key-value table that backs [`LocalStorage`](super::LocalStorage).

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::TimerError;

use super::local::LocalStorage;
use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &Path) -> Result<Self, TimerError> {
        let conn = Connection::open(path).map_err(|e| {
            TimerError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, TimerError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            TimerError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    fn migrate(&self) -> Result<(), TimerError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, TimerError> {
        migrations::get_version(&self.conn)
    }
}

impl LocalStorage for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>, TimerError> {
        self.conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| TimerError::Database(format!("Failed to read key {key}: {e}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), TimerError> {
        self.conn
            .execute(
                r"INSERT INTO local_storage (key, value, updated_at)
                  VALUES (?1, ?2, datetime('now'))
                  ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value],
            )
            .map_err(|e| TimerError::Database(format!("Failed to write key {key}: {e}")))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), TimerError> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", [key])
            .map_err(|e| TimerError::Database(format!("Failed to remove key {key}: {e}")))?;
        Ok(())
    }
}
