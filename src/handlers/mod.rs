//! One handler per session command. Each writes its output to `out`.

pub mod add;
pub mod delete;
pub mod filter;
pub mod list;
pub mod progress;
pub mod quote;
pub mod stats;
pub mod toggle;
