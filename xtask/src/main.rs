//! xtask - Development tasks for taskdesk

use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for taskdesk")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs {
        /// Directory the reference is written to
        #[arg(long, default_value = "docs/cli")]
        out_dir: PathBuf,
    },
}

fn main() -> io::Result<()> {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs { out_dir } => {
            let output_path = generate_cli_docs(&out_dir)?;
            println!("Generated CLI documentation at {}", output_path.display());
        }
    }
    Ok(())
}

/// Write `reference.md` for the taskdesk command line into `docs_dir`.
fn generate_cli_docs(docs_dir: &Path) -> io::Result<PathBuf> {
    let markdown = clap_markdown::help_markdown::<taskdesk::cli::Cli>();

    fs::create_dir_all(docs_dir)?;
    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown)?;

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_docs_covers_every_command() {
        let temp = tempfile::tempdir().unwrap();
        let output_path = generate_cli_docs(&temp.path().join("docs")).unwrap();

        let reference = fs::read_to_string(output_path).unwrap();
        for command in ["add", "list", "edit", "remove", "export", "due", "init"] {
            assert!(
                reference.contains(&format!("taskdesk {command}")),
                "reference is missing `taskdesk {command}`"
            );
        }
    }
}
