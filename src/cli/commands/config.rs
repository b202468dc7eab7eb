//! Config file commands.

use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::TimerError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config cannot be rendered or written.
pub fn config(ctx: &Context, cmd: ConfigCommands) -> Result<String, TimerError> {
    match cmd {
        ConfigCommands::Show => match ctx.format {
            OutputFormat::Json => to_json(&ctx.config),
            OutputFormat::Pretty => ctx.config.to_yaml(),
        },

        ConfigCommands::Init { force } => {
            let path = &ctx.paths.config_file;
            if path.exists() && !force {
                return Err(TimerError::Config(format!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                )));
            }
            ctx.paths.ensure_dirs()?;
            Config::default().save_to_path(path)?;
            Ok(format!(
                "{} Wrote default config to {}",
                "✓".green(),
                path.display()
            ))
        }

        ConfigCommands::Path => Ok(ctx.paths.config_file.display().to_string()),
    }
}
