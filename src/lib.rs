//! taskdesk library - task list storage, CSV export and the terminal UI

pub mod cli;
pub mod config;
pub mod task;
pub mod tui;
