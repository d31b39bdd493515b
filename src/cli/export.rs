//! `taskdesk export` command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::task::export;

#[derive(Args)]
pub struct ExportArgs {
    /// Destination CSV file (defaults to tarefas.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(config: &Config, file: Option<&Path>, args: ExportArgs) -> Result<()> {
    let store = super::open_store(config, file)?;
    let path = config.export_path(args.output.as_deref());

    export::export(store.list(), config.export.header, &path)
        .with_context(|| format!("Failed to export tasks to {}", path.display()))?;

    println!("✓ Exported {} tasks to {}", store.len(), path.display());

    Ok(())
}
