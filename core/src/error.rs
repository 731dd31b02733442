//! Error types shared by the parser, the task list and the storage layer.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure a command can run into. All of them are recoverable: the
/// console loop prints the message and waits for the next line.
#[derive(Error, Debug)]
pub enum TaskError {
    /// `todo`, `deadline` or `event` without a body
    #[error("The description of a task cannot be empty!")]
    MissingDescription,
    /// `deadline`/`event` without its ` /by ` or ` /at ` marker
    #[error("Date is missing!")]
    MissingDate,
    /// `done`/`delete` without a task number
    #[error("Please tell me which task number you mean!")]
    MissingTask,
    #[error("Invalid date! Dates must be in the form DD/MM/YYYY HHMM, e.g. 2/1/2020 1254.")]
    InvalidDate,
    /// Text the storage format cannot hold, e.g. a line break
    #[error("Sorry, {reason}!")]
    UnstorableText { reason: &'static str },
    #[error("'{argument}' is not a valid task number!")]
    InvalidArgument { argument: String },
    #[error("There is no task {index}, the list has {size} task(s).")]
    IndexOutOfRange { index: usize, size: usize },
    /// A stored record could not be turned back into a task
    #[error("Unable to read line {line} of the storage file!")]
    UnableToReadFile { line: usize },
    #[error("Something went wrong accessing '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No storage file detected at '{path}'!")]
    NoStorageFileDetected { path: PathBuf },
    #[error("Could not determine home directory")]
    HomeDirectory,
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
