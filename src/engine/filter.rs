//! Transient view state: which tasks the list currently shows.

use super::types::{Priority, Task};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Priority narrowing for a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    /// Returns true if a task of this priority passes the filter.
    #[must_use]
    pub fn accepts(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Low => priority == Priority::Low,
            Self::Medium => priority == Priority::Medium,
            Self::High => priority == Priority::High,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Low => Self::Low,
            Priority::Medium => Self::Medium,
            Priority::High => Self::High,
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.pad("all"),
            Self::Low => f.pad("low"),
            Self::Medium => f.pad("medium"),
            Self::High => f.pad("high"),
        }
    }
}

/// Search text plus priority narrowing.
///
/// Never stored with tasks; applying it produces a derived view and leaves
/// the store untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filter {
    search_text: String,
    #[serde(skip)]
    needle: String,
    priority: PriorityFilter,
}

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style search text.
    #[must_use]
    pub fn with_search(mut self, text: &str) -> Self {
        self.set_search(text);
        self
    }

    /// Builder-style priority narrowing.
    #[must_use]
    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    pub fn set_search(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.needle = text.to_lowercase();
    }

    pub fn set_priority(&mut self, priority: PriorityFilter) {
        self.priority = priority;
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn priority(&self) -> PriorityFilter {
        self.priority
    }

    /// Returns true when the filter hides anything at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty() || self.priority != PriorityFilter::All
    }

    /// Case-insensitive substring match on the name AND priority match.
    ///
    /// An empty search text matches every name.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.priority.accepts(task.priority) && task.name.to_lowercase().contains(&self.needle)
    }
}
