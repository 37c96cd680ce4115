//! Core engine modules for tasklist.

pub mod error;
pub mod filter;
pub mod progress;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use filter::{Filter, PriorityFilter};
pub use progress::{PriorityCounts, Progress};
pub use store::TaskStore;
pub use types::{Priority, Task, TaskId};
