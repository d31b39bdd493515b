//! `taskdesk edit` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::config::Config;
use crate::task::{Priority, TaskDraft};

#[derive(Args)]
pub struct EditArgs {
    /// Position of the task as shown by `taskdesk list`
    position: usize,

    /// New description
    #[arg(short = 't', long)]
    description: Option<String>,

    /// New priority (high, medium, low)
    #[arg(short, long, value_parser = super::parse_priority_arg)]
    priority: Option<Priority>,

    /// New due date (DD/MM/YYYY)
    #[arg(short, long)]
    due: Option<String>,
}

pub fn run(config: &Config, file: Option<&Path>, args: EditArgs) -> Result<()> {
    let mut store = super::open_store(config, file)?;
    let index = super::resolve_position(args.position, store.len())?;

    // Start from the current values, like a pre-filled form
    let mut draft = store
        .get(index)
        .map(TaskDraft::from)
        .unwrap_or_default();
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(priority) = args.priority {
        draft.priority = priority;
    }
    if let Some(due) = args.due {
        draft.due_date = due;
    }

    let task = store.edit(index, &draft)?.clone();
    super::save_store(&mut store)?;

    println!(
        "✓ Updated task, now #{}: {} | Priority: {} | Due: {}",
        store.len(),
        task.description,
        task.priority,
        task.due_date_text()
    );

    Ok(())
}
