//! In-memory ordered task list backed by the flat file

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

use super::error::{Result, TaskError};
use super::flatfile::{self, LoadReport, MalformedPolicy, SkippedRecord};
use super::model::{Priority, Task, TaskDraft};

/// Default due-soon window: today, overdue, or tomorrow.
pub const DUE_SOON_DAYS: i64 = 1;

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub path: PathBuf,
    pub on_malformed: MalformedPolicy,
    pub backup: bool,
}

impl StoreOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            on_malformed: MalformedPolicy::default(),
            backup: true,
        }
    }
}

/// Owns the ordered sequence of tasks. Indices are 0-based.
#[derive(Debug)]
pub struct TaskStore {
    options: StoreOptions,
    tasks: Vec<Task>,
    skipped: Vec<SkippedRecord>,
    dirty: bool,
}

impl TaskStore {
    /// Load the task file named by `options`, or start empty if it is absent.
    pub fn open(options: StoreOptions) -> Result<Self> {
        let LoadReport { tasks, skipped } = flatfile::load(&options.path, options.on_malformed)?;
        Ok(Self {
            options,
            tasks,
            skipped,
            dirty: false,
        })
    }

    /// A store that has not been read from disk. `save` still writes to `options.path`.
    pub fn with_tasks(options: StoreOptions, tasks: Vec<Task>) -> Self {
        Self {
            options,
            tasks,
            skipped: Vec::new(),
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.options.path
    }

    /// Records dropped while loading under [`MalformedPolicy::Skip`].
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    /// Whether there are changes not yet written by [`TaskStore::save`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validate and append a new task.
    pub fn add(&mut self, description: &str, priority: Priority, due_date: &str) -> Result<&Task> {
        let task = Task::new(description, priority, due_date)?;
        self.tasks.push(task);
        self.dirty = true;
        Ok(self.last())
    }

    pub fn add_draft(&mut self, draft: &TaskDraft) -> Result<&Task> {
        self.add(&draft.description, draft.priority, &draft.due_date)
    }

    pub fn remove(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        self.dirty = true;
        Ok(self.tasks.remove(index))
    }

    /// Replace the task at `index` with `draft`. The edited task moves to the end.
    ///
    /// The draft is validated before anything is removed, so a failed edit
    /// leaves the list untouched.
    pub fn edit(&mut self, index: usize, draft: &TaskDraft) -> Result<&Task> {
        self.check_index(index)?;
        let task = draft.validate()?;

        let old = self.tasks.remove(index);
        info!(
            "Edited task '{}' -> '{}' (moved to position {})",
            old.description,
            task.description,
            self.tasks.len() + 1
        );
        self.tasks.push(task);
        self.dirty = true;
        Ok(self.last())
    }

    pub fn due_soon(&self, today: NaiveDate) -> Vec<&Task> {
        due_soon(&self.tasks, today)
    }

    pub fn due_within(&self, today: NaiveDate, window_days: i64) -> Vec<&Task> {
        due_within(&self.tasks, today, window_days)
    }

    /// Write the current list to the task file.
    pub fn save(&mut self) -> Result<()> {
        flatfile::save(&self.tasks, &self.options.path, self.options.backup)?;
        self.dirty = false;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(TaskError::Index {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    fn last(&self) -> &Task {
        // Only called right after a push
        &self.tasks[self.tasks.len() - 1]
    }
}

/// Tasks due today, overdue, or due tomorrow, in list order.
pub fn due_soon(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    due_within(tasks, today, DUE_SOON_DAYS)
}

pub fn due_within(tasks: &[Task], today: NaiveDate, window_days: i64) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.is_due_within(today, window_days))
        .collect()
}
