//! CLI command implementations

pub mod add;
pub mod definition;
pub mod due;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod remove;

pub use definition::{Cli, Commands};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use unicode_width::UnicodeWidthChar;

use crate::config::Config;
use crate::task::{Priority, TaskStore};

/// Open the task store for a CLI command.
pub fn open_store(config: &Config, file: Option<&Path>) -> Result<TaskStore> {
    let options = config.store_options(file)?;
    let path = options.path.clone();
    TaskStore::open(options)
        .with_context(|| format!("Failed to load tasks from {}", path.display()))
}

pub fn save_store(store: &mut TaskStore) -> Result<()> {
    store
        .save()
        .with_context(|| format!("Failed to save tasks to {}", store.path().display()))
}

/// Convert a 1-based position into a 0-based index.
pub fn resolve_position(position: usize, len: usize) -> Result<usize> {
    if position == 0 || position > len {
        bail!("No task at position {} (the list has {} tasks)", position, len);
    }
    Ok(position - 1)
}

pub fn parse_priority_arg(s: &str) -> std::result::Result<Priority, String> {
    Priority::parse(s).ok_or_else(|| format!("invalid priority '{}' (use high, medium or low)", s))
}

pub fn parse_date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    crate::task::parse_due_date(s).map_err(|e| e.to_string())
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Truncate to at most `max` terminal columns, adding "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max {
        return s.to_string();
    }

    let budget = if max <= 3 { max } else { max - 3 };
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    if max > 3 {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests for truncate function
    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_equal_to_max() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_with_small_max() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 1), "h");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Descrição longa", 8), "Descr...");
        assert_eq!(truncate("Média", 5), "Média");
    }

    // Tests for resolve_position
    #[test]
    fn test_resolve_position_valid() {
        assert_eq!(resolve_position(1, 3).unwrap(), 0);
        assert_eq!(resolve_position(3, 3).unwrap(), 2);
    }

    #[test]
    fn test_resolve_position_zero() {
        let err = resolve_position(0, 3).unwrap_err();
        assert!(err.to_string().contains("No task at position 0"));
    }

    #[test]
    fn test_resolve_position_past_end() {
        assert!(resolve_position(4, 3).is_err());
        assert!(resolve_position(1, 0).is_err());
    }

    #[test]
    fn test_parse_priority_arg() {
        assert_eq!(parse_priority_arg("HIGH"), Ok(Priority::High));
        assert!(parse_priority_arg("asap").is_err());
    }

    #[test]
    fn test_parse_date_arg() {
        assert!(parse_date_arg("10/06/2024").is_ok());
        assert!(parse_date_arg("2024-06-10").is_err());
    }
}
