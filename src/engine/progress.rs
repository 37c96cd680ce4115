//! Aggregates over the task list: completion progress and priority buckets.

use super::types::{Priority, Task};
use serde::Serialize;

/// Completion progress of the whole list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// `round(100 * completed / total)`, 0 for an empty list.
    pub percent: u8,
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Computes progress over a set of tasks.
    #[must_use]
    pub fn measure<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut completed = 0;
        let mut total = 0;
        for task in tasks {
            total += 1;
            if task.completed {
                completed += 1;
            }
        }
        Self {
            percent: percent(completed, total),
            completed,
            total,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Integer round-half-up of `100 * part / whole`; 0 when `whole` is 0.
#[allow(clippy::cast_possible_truncation)]
fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u8
}

/// Count of tasks (and completed tasks) for one priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub total: usize,
    pub completed: usize,
}

/// Aggregate counts of tasks by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub low: Bucket,
    pub medium: Bucket,
    pub high: Bucket,
}

impl PriorityCounts {
    #[must_use]
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            let bucket = counts.bucket_mut(task.priority);
            bucket.total += 1;
            if task.completed {
                bucket.completed += 1;
            }
        }
        counts
    }

    #[must_use]
    pub fn bucket(&self, priority: Priority) -> Bucket {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }

    fn bucket_mut(&mut self, priority: Priority) -> &mut Bucket {
        match priority {
            Priority::Low => &mut self.low,
            Priority::Medium => &mut self.medium,
            Priority::High => &mut self.high,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.low.total + self.medium.total + self.high.total
    }
}
