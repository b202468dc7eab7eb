//! Path resolution for studytimer configuration and data files.
//!
//! All data lives under a single root, `~/.studytimer/` unless overridden
//! with `--data-dir` or `STUDYTIMER_HOME`:
//! - `config.yaml` - timer options and output preferences
//! - `studytimer.db` - SQLite key-value store holding history and counters

use std::path::{Path, PathBuf};

use crate::error::TimerError;

/// Environment variable that overrides the data root.
pub const HOME_ENV: &str = "STUDYTIMER_HOME";

/// Paths to studytimer configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.studytimer/`
    pub root: PathBuf,
    /// Config file: `~/.studytimer/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.studytimer/studytimer.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TimerError> {
        let home = std::env::var("HOME")
            .map_err(|_| TimerError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".studytimer")))
    }

    /// Resolve paths from an explicit root if given, otherwise from `$HOME`.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and `$HOME` is unset.
    pub fn resolve(root: Option<&Path>) -> Result<Self, TimerError> {
        match root {
            Some(root) => Ok(Self::with_root(root.to_path_buf())),
            None => Self::new(),
        }
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("studytimer.db"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TimerError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TimerError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-studytimer");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("studytimer.db"));
    }

    #[test]
    fn test_resolve_prefers_explicit_root() {
        let paths = Paths::resolve(Some(Path::new("/srv/timer"))).unwrap();
        assert_eq!(paths.root, PathBuf::from("/srv/timer"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("root"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
