//! `taskdesk add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::config::Config;
use crate::task::Priority;

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    description: String,

    /// Due date (DD/MM/YYYY)
    #[arg(short, long)]
    due: String,

    /// Priority (high, medium, low)
    #[arg(short, long, default_value = "medium", value_parser = super::parse_priority_arg)]
    priority: Priority,
}

pub fn run(config: &Config, file: Option<&Path>, args: AddArgs) -> Result<()> {
    let mut store = super::open_store(config, file)?;

    let task = store
        .add(&args.description, args.priority, &args.due)?
        .clone();
    super::save_store(&mut store)?;

    println!(
        "✓ Added #{}: {} | Priority: {} | Due: {}",
        store.len(),
        task.description,
        task.priority,
        task.due_date_text()
    );

    Ok(())
}
