//! Task management module
//!
//! This module owns the task list and everything that touches its data:
//! - Task validation (description, priority, DD/MM/YYYY due date)
//! - Ordered in-memory store with add/edit/remove
//! - Flat-file persistence (`description|priority|date` lines)
//! - Due-soon queries and CSV export

pub mod error;
pub mod export;
pub mod flatfile;
pub mod model;
pub mod store;

pub use error::{TaskError, ValidationError};
pub use export::{CsvHeader, DEFAULT_EXPORT_FILE};
pub use flatfile::{LoadReport, MalformedPolicy, SkippedRecord};
pub use model::{format_due_date, parse_due_date, Priority, Task, TaskDraft, DATE_FORMAT};
pub use store::{due_soon, due_within, StoreOptions, TaskStore, DUE_SOON_DAYS};
