//! In-memory task list: prioritized tasks, filtered views and progress.
//!
//! The `engine` module is the whole domain: a [`engine::TaskStore`] owns the
//! tasks, and every view (filtering, progress, priority buckets) is derived
//! from it without mutation. The `shell` and `handlers` modules are the
//! line-oriented session the `tasklist` binary runs on top of it.

pub mod config;
pub mod engine;
pub mod handlers;
pub mod quotes;
pub mod shell;
