//! studytimer - a study session timer
//!
//! This crate provides a Pomodoro-style countdown with focus sessions and
//! breaks, durable session history, and daily study statistics, plus a CLI
//! and terminal dashboard on top of it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TimerError;
pub use features::timer::{format_time, SessionDraft, StudySession, StudyTimer, TimerDriver};
