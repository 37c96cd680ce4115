//! Task Store: the in-memory task list and every operation on it.

use super::error::{Result, StoreError};
use super::filter::Filter;
use super::progress::{PriorityCounts, Progress};
use super::types::{Priority, Task, TaskId};
use tracing::debug;

/// Ordered list of tasks, in insertion order.
///
/// No operation reorders the remaining tasks. Ids come from a counter that
/// only moves forward, so a deleted task's id is never handed out again.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new, uncompleted task.
    ///
    /// The name is stored exactly as given; only the emptiness check trims it.
    ///
    /// # Errors
    /// Returns `StoreError::EmptyName` if the name is empty or whitespace only.
    pub fn add_task(&mut self, name: &str, priority: Priority) -> Result<TaskId> {
        if name.trim().is_empty() {
            debug!("rejected task with empty name");
            return Err(StoreError::EmptyName);
        }

        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, name, priority));
        debug!(%id, %priority, "task added");
        Ok(id)
    }

    /// Flips the completion flag of a task and returns the new value.
    ///
    /// # Errors
    /// Returns `StoreError::UnknownTask` if no task has this id.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::UnknownTask(id))?;
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "task toggled");
        Ok(task.completed)
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    /// Returns `StoreError::UnknownTask` if no task has this id.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task> {
        let pos = self.position(id).ok_or(StoreError::UnknownTask(id))?;
        let task = self.tasks.remove(pos);
        debug!(%id, remaining = self.tasks.len(), "task deleted");
        Ok(task)
    }

    /// Completion progress over every task, regardless of any filter.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::measure(&self.tasks)
    }

    /// Tasks passing the filter, in store order.
    #[must_use]
    pub fn filtered_view(&self, filter: &Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Task counts bucketed by priority.
    #[must_use]
    pub fn priority_counts(&self) -> PriorityCounts {
        PriorityCounts::tally(&self.tasks)
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}
