//! Handlers for the `search`, `priority` and `clear` commands.

use crate::engine::PriorityFilter;
use crate::handlers::list;
use crate::shell::Session;
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Sets the search text and shows the narrowed list. Empty text clears it.
///
/// # Errors
/// Returns error if writing output fails.
pub fn search(session: &mut Session, text: &str, out: &mut dyn Write) -> Result<()> {
    session.filter_mut().set_search(text);
    debug!(search = text, "filter changed");
    list::handle(session, false, out)
}

/// Sets the priority filter and shows the narrowed list.
///
/// # Errors
/// Returns error if writing output fails.
pub fn priority(session: &mut Session, level: PriorityFilter, out: &mut dyn Write) -> Result<()> {
    session.filter_mut().set_priority(level);
    debug!(%level, "filter changed");
    list::handle(session, false, out)
}

/// Resets the filter so every task shows.
///
/// # Errors
/// Returns error if writing output fails.
pub fn clear(session: &mut Session, out: &mut dyn Write) -> Result<()> {
    *session.filter_mut() = Default::default();
    debug!("filter cleared");
    list::handle(session, false, out)
}
