//! `taskdesk init` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

use crate::config::{self, Config};

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

/// Write a config file with every setting at its default value.
pub fn run(config_path: Option<&Path>, args: InitArgs) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => config::default_config_path()?,
    };

    if path.exists() && !args.force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default config to {}", path.display());

    Ok(())
}
