use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::HOME_ENV;
use crate::features::timer::{parse_minutes, BreakKind, SessionType, DEFAULT_HISTORY_DAYS};

#[derive(Parser)]
#[command(name = "studytimer")]
#[command(about = "A Pomodoro-style study session timer with history and daily stats")]
#[command(long_about = "studytimer - focus sessions, breaks and study history

Runs focus sessions and breaks as a countdown in the terminal, records every
completed session, and reports what you studied.

QUICK START:
  studytimer start                       25-minute focus session
  studytimer start -s Calculus -d 50m    50 minutes of Calculus
  studytimer break                       The break your streak calls for
  studytimer today                       Today's focus totals
  studytimer dashboard                   Interactive timer

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  studytimer <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding config.yaml and the session database
    #[arg(long, global = true, env = HOME_ENV, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a session in the foreground
    ///
    /// Counts down in the terminal and records the session when it
    /// completes. Press Ctrl-C to abandon it; abandoned sessions are not
    /// recorded.
    ///
    /// # Examples
    ///
    ///   studytimer start
    ///   studytimer start --subject Physics --duration 50m
    ///   studytimer start --type custom --duration 1h30m
    #[command(alias = "s")]
    Start(StartArgs),

    /// Run a break in the foreground
    ///
    /// With no argument the break follows the long-break interval:
    /// every Nth completed focus session earns a long break.
    #[command(alias = "b")]
    Break {
        /// Break length: short, long or auto
        #[arg(value_enum, default_value = "auto")]
        kind: BreakArg,
    },

    /// List completed sessions
    #[command(alias = "h")]
    History {
        /// How many days back to look
        #[arg(long, short = 'd', default_value_t = DEFAULT_HISTORY_DAYS)]
        days: u32,
    },

    /// Show focus totals for today
    #[command(alias = "t")]
    Today,

    /// Show lifetime counters and the next suggested break
    Stats,

    /// Rate a completed session
    ///
    /// # Examples
    ///
    ///   studytimer rate 1752580800000 4
    ///   studytimer rate 1752580800000 5 --notes "deep focus"
    Rate {
        /// Session id, as shown by `history`
        id: String,

        /// Quality from 1 (poor) to 5 (excellent)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        quality: u8,

        /// Notes to attach
        #[arg(long, short = 'n')]
        notes: Option<String>,
    },

    /// Delete all recorded sessions and counters
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Ask for permission to show desktop notifications
    NotifyPermission,

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   studytimer completions bash > ~/.bash_completion.d/studytimer
    ///   studytimer completions zsh > ~/.zfunc/_studytimer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Interactive timer dashboard
    ///
    /// Keys: s start focus, b break, p pause/resume, x stop, n skip, q quit.
    #[command(alias = "tui")]
    Dashboard,
}

/// Arguments for `start`.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// What you are studying
    #[arg(long, short = 's')]
    pub subject: Option<String>,

    /// Session length (e.g., 25, 25m, 1h30m, 90s)
    #[arg(long, short = 'd', value_parser = parse_minutes_arg)]
    pub duration: Option<u32>,

    /// Session type (focus, short-break, long-break, custom)
    #[arg(long = "type", short = 't', value_parser = parse_session_type)]
    pub session_type: Option<SessionType>,

    /// Technique label
    #[arg(long)]
    pub technique: Option<String>,

    /// Notes for this session
    #[arg(long, short = 'n')]
    pub notes: Option<String>,
}

/// Break selection for `break`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakArg {
    /// The configured short break.
    Short,
    /// The configured long break.
    Long,
    /// Whichever the long-break interval calls for.
    Auto,
}

impl BreakArg {
    /// Resolve to a concrete break, deferring to `suggested` for `Auto`.
    #[must_use]
    pub const fn resolve(self, suggested: BreakKind) -> BreakKind {
        match self {
            Self::Short => BreakKind::Short,
            Self::Long => BreakKind::Long,
            Self::Auto => suggested,
        }
    }
}

/// Arguments for `config`.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the config file location
    Path,
}

fn parse_minutes_arg(s: &str) -> Result<u32, String> {
    parse_minutes(s).ok_or_else(|| {
        format!("invalid duration '{s}': use minutes or a form like 25m, 1h30m, 90s (at least one minute)")
    })
}

fn parse_session_type(s: &str) -> Result<SessionType, String> {
    SessionType::parse(s).ok_or_else(|| {
        format!("unknown session type '{s}': use focus, short-break, long-break or custom")
    })
}
