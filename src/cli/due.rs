//! `taskdesk due` command implementation

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::Path;

use crate::config::Config;

#[derive(Args)]
pub struct DueArgs {
    /// Days ahead that still count as due soon (defaults to the config value, 1)
    #[arg(long)]
    days: Option<i64>,

    /// Reference date instead of today (DD/MM/YYYY)
    #[arg(long, value_parser = super::parse_date_arg)]
    today: Option<NaiveDate>,
}

pub fn run(config: &Config, file: Option<&Path>, args: DueArgs) -> Result<()> {
    let store = super::open_store(config, file)?;
    let today = args.today.unwrap_or_else(super::today);
    let window = args.days.unwrap_or(config.notifications.due_window_days);

    let due = store.due_within(today, window);
    if due.is_empty() {
        println!("Nothing due soon.");
        return Ok(());
    }

    for task in due {
        println!("⚠ {}", task.due_notice(today));
    }

    Ok(())
}
