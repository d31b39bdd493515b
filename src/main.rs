//! taskdesk - single-user task list manager for the terminal

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use taskdesk::cli::{self, Cli, Commands};
use taskdesk::config::{self, Config};
use taskdesk::tui;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TASKDESK_LOG";
const DEBUG_ENV: &str = "TASKDESK_DEBUG";
const DEFAULT_FILTER: &str = "taskdesk=warn";

fn log_filter() -> EnvFilter {
    if std::env::var(DEBUG_ENV).is_ok() {
        return EnvFilter::new("taskdesk=debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// The TUI owns the terminal, so its logs go to a file in the data dir.
fn init_logging(tui_mode: bool) -> Result<()> {
    if !tui_mode {
        tracing_subscriber::fmt()
            .with_env_filter(log_filter())
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    let log_dir = config::get_data_dir()?;
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;
    let log_path = log_dir.join("taskdesk.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Completion needs neither config nor data
    if let Some(Commands::Completion { shell }) = &cli.command {
        generate(*shell, &mut Cli::command(), "taskdesk", &mut std::io::stdout());
        return Ok(());
    }

    init_logging(cli.command.is_none())?;

    // Init writes the config, so it must not require a valid one
    if let Some(Commands::Init(args)) = cli.command {
        return cli::init::run(cli.config.as_deref(), args);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let file = cli.file.as_deref();

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&config, file, args),
        Some(Commands::List(args)) => cli::list::run(&config, file, args),
        Some(Commands::Edit(args)) => cli::edit::run(&config, file, args),
        Some(Commands::Remove(args)) => cli::remove::run(&config, file, args),
        Some(Commands::Export(args)) => cli::export::run(&config, file, args),
        Some(Commands::Due(args)) => cli::due::run(&config, file, args),
        Some(Commands::Init(_)) | Some(Commands::Completion { .. }) => unreachable!(),
        None => tui::run(&config, file),
    }
}
