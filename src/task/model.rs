//! Task data model

use chrono::NaiveDate;
use std::fmt;

use super::error::ValidationError;

/// Display and storage format for due dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Parse priority from text.
    ///
    /// Accepts the canonical labels in any case, plus the Portuguese labels
    /// older task files were written with.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "alta" => Some(Self::High),
            "medium" | "med" | "média" | "media" => Some(Self::Medium),
            "low" | "baixa" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// The next priority in display order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a `D/M/YYYY` or `DD/MM/YYYY` date. The year must be exactly four digits.
pub fn parse_due_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyDueDate);
    }

    let invalid = || ValidationError::InvalidDueDate(text.to_string());

    let parts: Vec<&str> = text.split('/').collect();
    let [day, month, year] = parts[..] else {
        return Err(invalid());
    };

    let is_number = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
    };
    if !is_number(day, 1, 2) || !is_number(month, 1, 2) || !is_number(year, 4, 4) {
        return Err(invalid());
    }

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

impl Task {
    /// Validate raw user input and build a task from it.
    pub fn new(
        description: &str,
        priority: Priority,
        due_date: &str,
    ) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if description.contains(['|', '\n', '\r']) {
            return Err(ValidationError::ReservedCharacter);
        }
        let due_date = parse_due_date(due_date)?;

        Ok(Self {
            description: description.to_string(),
            priority,
            due_date,
        })
    }

    pub fn due_date_text(&self) -> String {
        format_due_date(self.due_date)
    }

    /// Whole days from `today` until the due date; negative when overdue.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    /// Due today, overdue, or at most `window_days` away.
    pub fn is_due_within(&self, today: NaiveDate, window_days: i64) -> bool {
        self.days_until(today) <= window_days
    }

    /// Reminder text shown for a due-soon task.
    pub fn due_notice(&self, today: NaiveDate) -> String {
        let when = match self.days_until(today) {
            d if d < -1 => format!("is overdue by {} days", -d),
            -1 => "was due yesterday".to_string(),
            0 => "is due today".to_string(),
            1 => "is due tomorrow".to_string(),
            d => format!("is due in {} days", d),
        };
        format!("The task '{}' {} ({})", self.description, when, self.due_date_text())
    }
}

/// Raw, unvalidated task fields as typed into a form or passed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
}

impl TaskDraft {
    pub fn new(
        description: impl Into<String>,
        priority: Priority,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            priority,
            due_date: due_date.into(),
        }
    }

    pub fn validate(&self) -> Result<Task, ValidationError> {
        Task::new(&self.description, self.priority, &self.due_date)
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            description: task.description.clone(),
            priority: task.priority,
            due_date: task.due_date_text(),
        }
    }
}
