//! Terminal User Interface module

mod app;
mod components;
pub mod dialogs;
mod home;
mod styles;

pub use app::*;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::task::TaskStore;

pub fn run(config: &Config, file: Option<&Path>) -> Result<()> {
    // Load before touching the terminal so errors print normally
    let options = config.store_options(file)?;
    let store = TaskStore::open(options)
        .with_context(|| "Failed to load tasks; fix or move the file and try again")?;
    info!(
        "Opened {} with {} tasks",
        store.path().display(),
        store.len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, store, chrono::Local::now().date_naive());
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
