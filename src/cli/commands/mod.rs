//! Command implementations for studytimer.
//!
//! Each command returns the text to print; `main` prints it.

mod completions;
mod config;
mod history;
mod timer;

pub use completions::completions;
pub use config::config;
pub use history::{clear, history, rate, stats, today};
pub use timer::{notify_permission, start, take_break};

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::TimerError;
use crate::features::signals::{default_chime, default_notifier};
use crate::features::timer::StudyTimer;
use crate::storage::Database;

/// Everything a command needs from the environment.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved data locations.
    pub paths: Paths,
    /// Loaded configuration.
    pub config: Config,
    /// Requested output format.
    pub format: OutputFormat,
}

impl Context {
    /// Build a context, reading the config under `paths`.
    ///
    /// `format` overrides `general.default_output` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load(paths: Paths, format: Option<OutputFormat>) -> Result<Self, TimerError> {
        let config = Config::load_from_path(&paths.config_file)?;
        let format = format.unwrap_or(config.general.default_output);
        Ok(Self {
            paths,
            config,
            format,
        })
    }

    /// Open the timer backed by the session database.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open_timer(&self) -> Result<StudyTimer, TimerError> {
        self.paths.ensure_dirs()?;
        let database = Database::open_at(&self.paths.database)?;
        Ok(StudyTimer::new(self.config.timer.clone(), Box::new(database))
            .with_chime(default_chime())
            .with_notifier(default_notifier()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::load(Paths::with_root(dir.path().to_path_buf()), None).unwrap();
        assert_eq!(ctx.format, OutputFormat::Pretty);
        assert_eq!(ctx.config.timer.focus_duration, 25);
    }

    #[test]
    fn test_context_format_override() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "general:\n  default_output: json\n").unwrap();

        let ctx = Context::load(paths.clone(), None).unwrap();
        assert_eq!(ctx.format, OutputFormat::Json);

        let ctx = Context::load(paths, Some(OutputFormat::Pretty)).unwrap();
        assert_eq!(ctx.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_open_timer_creates_database() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested");
        let ctx = Context::load(Paths::with_root(root.clone()), None).unwrap();

        let timer = ctx.open_timer().unwrap();
        assert!(timer.sessions().is_empty());
        assert!(root.join("studytimer.db").exists());
    }
}
