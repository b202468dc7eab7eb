//! Storage layer for studytimer.
//!
//! Completed sessions and cumulative counters are persisted as JSON values
//! in a key-value store. The `SQLite` database is the durable backend;
//! `MemoryStorage` serves tests and ephemeral runs.

mod database;
mod local;
mod migrations;

pub use database::Database;
pub use local::{LocalStorage, MemoryStorage};
