//! Flat-file task persistence
//!
//! One task per line, fields joined by `|`:
//!
//! ```text
//! Buy milk|Low|01/01/2025
//! File taxes|High|15/04/2025
//! ```
//!
//! There is no escaping and no header. A missing file is an empty list.
//! Files are written as UTF-8; lines that are not valid UTF-8 are read as
//! Windows-1252, the encoding older task files were saved with.

use encoding_rs::WINDOWS_1252;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::{Result, TaskError};
use super::model::{parse_due_date, Priority, Task};

pub const DELIMITER: char = '|';

/// What to do with a line that does not decode into a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop the line, log a warning and report it in [`LoadReport::skipped`].
    #[default]
    Skip,
    /// Abort the whole load with [`TaskError::MalformedRecord`].
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedRecord>,
}

pub fn encode_line(task: &Task) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        task.description,
        task.priority.label(),
        task.due_date_text()
    )
}

/// Decode one trimmed, non-blank line. The error is a human-readable reason.
pub fn decode_line(line: &str) -> std::result::Result<Task, String> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [description, priority, due_date] = fields[..] else {
        return Err(format!(
            "expected 3 fields separated by '{DELIMITER}', found {}",
            fields.len()
        ));
    };

    let priority =
        Priority::parse(priority).ok_or_else(|| format!("unknown priority '{priority}'"))?;
    let due_date = parse_due_date(due_date).map_err(|e| e.to_string())?;

    Ok(Task {
        description: description.to_string(),
        priority,
        due_date,
    })
}

/// Decode raw file bytes line by line, falling back to Windows-1252 for any
/// line that is not valid UTF-8. Line numbering is preserved.
pub fn decode_content(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(content) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(content);
    }

    let lines: Vec<Cow<'_, str>> = bytes
        .split(|&b| b == b'\n')
        .enumerate()
        .map(|(idx, raw)| match std::str::from_utf8(raw) {
            Ok(line) => Cow::Borrowed(line),
            Err(_) => {
                debug!("Line {} is not UTF-8, reading it as Windows-1252", idx + 1);
                let (line, _) = WINDOWS_1252.decode_without_bom_handling(raw);
                line
            }
        })
        .collect();

    Cow::Owned(lines.join("\n"))
}

/// Parse file content. Blank lines are ignored.
pub fn parse(content: &str, policy: MalformedPolicy) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match decode_line(line) {
            Ok(task) => report.tasks.push(task),
            Err(reason) => match policy {
                MalformedPolicy::Fail => {
                    return Err(TaskError::MalformedRecord {
                        line: idx + 1,
                        reason,
                    })
                }
                MalformedPolicy::Skip => report.skipped.push(SkippedRecord {
                    line: idx + 1,
                    reason,
                }),
            },
        }
    }

    Ok(report)
}

pub fn render(tasks: &[Task]) -> String {
    let mut output = String::new();
    for task in tasks {
        output.push_str(&encode_line(task));
        output.push('\n');
    }
    output
}

pub fn load(path: &Path, policy: MalformedPolicy) -> Result<LoadReport> {
    if !path.exists() {
        debug!("No task file at {}, starting empty", path.display());
        return Ok(LoadReport::default());
    }

    let bytes = fs::read(path).map_err(|e| TaskError::io(path, e))?;
    let report = parse(&decode_content(&bytes), policy)?;

    for skipped in &report.skipped {
        warn!(
            "Skipping malformed task record {}:{}: {}",
            path.display(),
            skipped.line,
            skipped.reason
        );
    }
    debug!("Loaded {} tasks from {}", report.tasks.len(), path.display());

    Ok(report)
}

/// Overwrite `path` with `tasks`. With `backup`, an existing file is first
/// copied to `<path>.bak`.
pub fn save(tasks: &[Task], path: &Path, backup: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
    }

    if backup && path.exists() {
        let backup_path = backup_path(path);
        if let Err(e) = fs::copy(path, &backup_path) {
            warn!("Failed to create backup: {}", e);
        }
    }

    fs::write(path, render(tasks)).map_err(|e| TaskError::io(path, e))?;
    debug!("Saved {} tasks to {}", tasks.len(), path.display());
    Ok(())
}

pub fn backup_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    name.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn task(description: &str, priority: Priority, due: &str) -> Task {
        Task::new(description, priority, due).unwrap()
    }

    const SAMPLE: &str = "Buy milk|Low|01/01/2025\nFile taxes|High|15/04/2025\n";

    #[test]
    fn test_encode_line() {
        let line = encode_line(&task("Buy milk", Priority::Low, "1/1/2025"));
        assert_eq!(line, "Buy milk|Low|01/01/2025");
    }

    #[test]
    fn test_decode_line() {
        let task = decode_line("File taxes|High|15/04/2025").unwrap();
        assert_eq!(task.description, "File taxes");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
    }

    #[test]
    fn test_decode_line_legacy_priority() {
        let task = decode_line("Pagar contas|Média|10/06/2024").unwrap();
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn test_decode_line_wrong_field_count() {
        let err = decode_line("only|two").unwrap_err();
        assert!(err.contains("found 2"));

        let err = decode_line("a|b|High|01/01/2025").unwrap_err();
        assert!(err.contains("found 4"));
    }

    #[test]
    fn test_decode_line_bad_fields() {
        assert!(decode_line("x|Urgent|01/01/2025")
            .unwrap_err()
            .contains("unknown priority"));
        assert!(decode_line("x|Low|2025-01-01")
            .unwrap_err()
            .contains("Invalid date"));
    }

    #[test]
    fn test_parse_sample() -> Result<()> {
        let report = parse(SAMPLE, MalformedPolicy::Fail)?;
        assert_eq!(report.tasks.len(), 2);
        assert_eq!(report.tasks[0].description, "Buy milk");
        assert_eq!(report.tasks[1].description, "File taxes");
        assert!(report.skipped.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_ignores_blank_lines() -> Result<()> {
        let report = parse("\n  \nBuy milk|Low|01/01/2025\r\n\n", MalformedPolicy::Fail)?;
        assert_eq!(report.tasks.len(), 1);
        Ok(())
    }

    #[test]
    fn test_parse_skip_policy_reports_line_numbers() -> Result<()> {
        let content = "Buy milk|Low|01/01/2025\ngarbage\nFile taxes|High|15/04/2025\n";
        let report = parse(content, MalformedPolicy::Skip)?;
        assert_eq!(report.tasks.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
        Ok(())
    }

    #[test]
    fn test_parse_fail_policy() {
        let content = "Buy milk|Low|01/01/2025\ngarbage\n";
        let err = parse(content, MalformedPolicy::Fail).unwrap_err();
        assert!(matches!(err, TaskError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_render_matches_sample() {
        let tasks = vec![
            task("Buy milk", Priority::Low, "01/01/2025"),
            task("File taxes", Priority::High, "15/04/2025"),
        ];
        assert_eq!(render(&tasks), SAMPLE);
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_load_missing_file_is_empty() -> Result<()> {
        let temp = tempdir().unwrap();
        let report = load(&temp.path().join("tarefas.txt"), MalformedPolicy::Fail)?;
        assert!(report.tasks.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_unreadable_path_is_io_error() {
        let temp = tempdir().unwrap();
        // A directory exists but cannot be read as a file
        let err = load(temp.path(), MalformedPolicy::Skip).unwrap_err();
        assert!(matches!(err, TaskError::Io { .. }));
    }

    #[test]
    fn test_decode_content_utf8_is_borrowed() {
        let content = decode_content("Pagar contas|Média|10/06/2024\n".as_bytes());
        assert!(matches!(content, Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_content_windows_1252_lines() {
        let bytes = b"ok|Alta|01/01/2025\nPagar contas|M\xE9dia|10/06/2024\n";
        let content = decode_content(bytes);
        assert_eq!(
            content,
            "ok|Alta|01/01/2025\nPagar contas|Média|10/06/2024\n"
        );
    }

    #[test]
    fn test_load_legacy_windows_1252_file() -> Result<()> {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tarefas.txt");
        fs::write(&path, b"Pagar contas|M\xE9dia|10/06/2024\nok|Alta|01/01/2025\n").unwrap();

        let report = load(&path, MalformedPolicy::Fail)?;

        assert!(report.skipped.is_empty());
        assert_eq!(
            report.tasks,
            vec![
                task("Pagar contas", Priority::Medium, "10/06/2024"),
                task("ok", Priority::High, "01/01/2025"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_save_then_load_roundtrip() -> Result<()> {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("tarefas.txt");
        let tasks = vec![
            task("Buy milk", Priority::Low, "01/01/2025"),
            task("Call, then email", Priority::Medium, "9/3/2026"),
            task("File taxes", Priority::High, "15/04/2025"),
        ];

        save(&tasks, &path, false)?;
        let report = load(&path, MalformedPolicy::Fail)?;

        assert_eq!(report.tasks, tasks);
        Ok(())
    }

    #[test]
    fn test_save_creates_backup() -> Result<()> {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tarefas.txt");

        save(&[task("first", Priority::Low, "01/01/2025")], &path, true)?;
        save(&[task("second", Priority::Low, "01/01/2025")], &path, true)?;

        let backup = fs::read_to_string(backup_path(&path)).unwrap();
        assert!(backup.contains("first"));
        let current = fs::read_to_string(&path).unwrap();
        assert!(current.contains("second"));
        Ok(())
    }

    #[test]
    fn test_save_without_backup() -> Result<()> {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tarefas.txt");

        save(&[], &path, false)?;
        save(&[], &path, false)?;

        assert!(!backup_path(&path).exists());
        Ok(())
    }

    #[test]
    fn test_policy_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: MalformedPolicy,
        }
        let w: Wrapper = toml::from_str(r#"policy = "fail""#).unwrap();
        assert_eq!(w.policy, MalformedPolicy::Fail);
    }
}
