//! Command-line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::due::DueArgs;
use super::edit::EditArgs;
use super::export::ExportArgs;
use super::init::InitArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;

#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(about = "Task list manager with due-date reminders and CSV export")]
#[command(version)]
pub struct Cli {
    /// Task file to read and write (defaults to the data directory)
    #[arg(long, global = true, env = "TASKDESK_FILE")]
    pub file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "TASKDESK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List tasks in display order
    #[command(alias = "ls")]
    List(ListArgs),

    /// Edit a task (it moves to the end of the list)
    Edit(EditArgs),

    /// Remove a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Export tasks to CSV
    Export(ExportArgs),

    /// Show tasks that are overdue or due soon
    Due(DueArgs),

    /// Write a default config file (to --config or the default location)
    Init(InitArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
