//! Errors returned by `TaskStore` operations.

use super::types::TaskId;
use thiserror::Error;

/// A rejected store operation. The store is unchanged whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The name was empty or whitespace only.
    #[error("task name cannot be empty")]
    EmptyName,

    /// No task with this id is currently in the store.
    #[error("no task {0}")]
    UnknownTask(TaskId),
}

pub type Result<T> = std::result::Result<T, StoreError>;
