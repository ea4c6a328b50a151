use thiserror::Error;

/// Failures reading or writing the tasks file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to read tasks file: {0}")]
    Read(std::io::Error),

    #[error("Failed to parse tasks file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write tasks file: {0}")]
    Write(std::io::Error),
}

/// Errors surfaced by store operations.
///
/// `EmptyTitle` and `NoSuchTask` are caller mistakes: the store is left
/// unchanged and the caller should re-prompt. `Persistence` means the tasks
/// file could not be read or written.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("No task at position {0}")]
    NoSuchTask(usize),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
