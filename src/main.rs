use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use studytimer::cli::args::{Cli, Commands};
use studytimer::cli::commands::{self, Context};
use studytimer::config::Paths;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.data_dir.as_deref())?;
    let ctx = Context::load(paths, cli.output)?;
    ctx.config.general.color.apply();

    let output = match cli.command {
        Commands::Start(args) => commands::start(&ctx, args)?,
        Commands::Break { kind } => commands::take_break(&ctx, kind)?,
        Commands::History { days } => commands::history(&ctx, days)?,
        Commands::Today => commands::today(&ctx)?,
        Commands::Stats => commands::stats(&ctx)?,
        Commands::Rate { id, quality, notes } => commands::rate(&ctx, &id, quality, notes)?,
        Commands::Clear { force } => commands::clear(&ctx, force)?,
        Commands::NotifyPermission => commands::notify_permission(&ctx)?,
        Commands::Config(args) => commands::config(&ctx, args.command)?,
        Commands::Completions { shell } => commands::completions(shell)?,
        Commands::Dashboard => {
            studytimer::tui::run(ctx.open_timer()?)?;
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
