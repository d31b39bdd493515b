use std::path::PathBuf;

use thiserror::Error;

/// Rejected user input for a task. Nothing is stored when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Fill in all fields: the description is empty")]
    EmptyDescription,

    #[error("Fill in all fields: the due date is empty")]
    EmptyDueDate,

    #[error("Invalid date '{0}'. Use the DD/MM/YYYY format.")]
    InvalidDueDate(String),

    #[error("The description cannot contain '|' or line breaks")]
    ReservedCharacter,
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No task at index {index} (the list has {len} tasks)")]
    Index { index: usize, len: usize },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl TaskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
