//! `taskdesk remove` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::config::Config;

#[derive(Args)]
pub struct RemoveArgs {
    /// Position of the task as shown by `taskdesk list`
    position: usize,
}

pub fn run(config: &Config, file: Option<&Path>, args: RemoveArgs) -> Result<()> {
    let mut store = super::open_store(config, file)?;
    let index = super::resolve_position(args.position, store.len())?;

    let removed = store.remove(index)?;
    super::save_store(&mut store)?;

    println!("✓ Removed #{}: {}", args.position, removed.description);

    Ok(())
}
