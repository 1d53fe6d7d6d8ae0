//! Chronicare CLI - Command-line interface for chronic condition risk assessment.

use chronicare_cli::commands;
use chronicare_cli::repl;
use chronicare_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> chronicare_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config (defaults when no file exists)
    let config = Config::load(cli.config.as_deref())?;

    init_tracing(cli.verbose, &config.settings.log_level);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);
    let policy = config.settings.range_policy;

    match cli.command {
        None | Some(Command::Repl) => repl::run_repl(&config, &formatter)?,
        Some(Command::Assess(args)) => commands::execute_assess(args, policy, &formatter)?,
        Some(Command::Plan(args)) => commands::execute_plan(args, &formatter)?,
        Some(Command::Evaluate(args)) => commands::execute_evaluate(args, policy, &formatter)?,
        Some(Command::Fields(args)) => commands::execute_fields(args, &formatter)?,
    }

    Ok(())
}

/// Initialize tracing (log to stderr). `RUST_LOG` wins over flags and config.
fn init_tracing(verbose: bool, log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { log_level })
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
