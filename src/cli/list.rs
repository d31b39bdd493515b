//! `taskdesk list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::task::Task;

const TABLE_COL_POSITION: usize = 4;
const TABLE_COL_DESCRIPTION: usize = 40;
const TABLE_COL_PRIORITY: usize = 8;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Only show tasks that are overdue or due soon
    #[arg(long)]
    due_soon: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    position: usize,
    description: &'a str,
    priority: &'static str,
    due_date: String,
    days_until_due: i64,
}

fn print_table_header() {
    println!(
        "{:>width_pos$}  {:<width_desc$} {:<width_prio$} DUE",
        "#",
        "DESCRIPTION",
        "PRIORITY",
        width_pos = TABLE_COL_POSITION,
        width_desc = TABLE_COL_DESCRIPTION,
        width_prio = TABLE_COL_PRIORITY
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_POSITION + TABLE_COL_DESCRIPTION + TABLE_COL_PRIORITY + 14)
    );
}

fn print_table_row(position: usize, task: &Task) {
    let description = super::truncate(&task.description, TABLE_COL_DESCRIPTION);
    // `{:<N}` pads by char count, so pad by display width ourselves
    let pad = TABLE_COL_DESCRIPTION.saturating_sub(unicode_width::UnicodeWidthStr::width(
        description.as_str(),
    ));
    println!(
        "{:>width_pos$}  {}{} {:<width_prio$} {}",
        position,
        description,
        " ".repeat(pad),
        task.priority.label(),
        task.due_date_text(),
        width_pos = TABLE_COL_POSITION,
        width_prio = TABLE_COL_PRIORITY
    );
}

pub fn run(config: &Config, file: Option<&Path>, args: ListArgs) -> Result<()> {
    let store = super::open_store(config, file)?;
    let today = super::today();
    let window = config.notifications.due_window_days;

    let rows: Vec<(usize, &Task)> = store
        .list()
        .iter()
        .enumerate()
        .map(|(idx, task)| (idx + 1, task))
        .filter(|(_, task)| !args.due_soon || task.is_due_within(today, window))
        .collect();

    if args.json {
        let tasks: Vec<TaskJson> = rows
            .iter()
            .map(|(position, task)| TaskJson {
                position: *position,
                description: &task.description,
                priority: task.priority.label(),
                due_date: task.due_date_text(),
                days_until_due: task.days_until(today),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if rows.is_empty() {
        if args.due_soon {
            println!("No tasks due soon.");
        } else {
            println!("No tasks yet. Add one with 'taskdesk add'.");
        }
        return Ok(());
    }

    print_table_header();
    for (position, task) in &rows {
        print_table_row(*position, task);
    }
    println!("\nTotal: {} tasks", rows.len());

    Ok(())
}
