//! Handler for the `add` command.

use crate::engine::{Priority, StoreError};
use crate::handlers::progress;
use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use tracing::debug;

/// Adds a task with the given (or default) priority.
///
/// An empty name is ignored unless the session is strict, in which case a
/// validation message is shown. Either way nothing is added.
///
/// # Errors
/// Returns error if writing output fails.
pub fn handle(
    session: &mut Session,
    name: &str,
    priority: Option<Priority>,
    out: &mut dyn Write,
) -> Result<()> {
    let priority = priority.unwrap_or(session.config().default_priority);

    match session.store_mut().add_task(name, priority) {
        Ok(id) => {
            writeln!(
                out,
                "{} Added task [{}] {} ({})",
                "✓".green(),
                id.to_string().yellow(),
                name,
                progress::priority_label(priority)
            )?;
            session.rotate_quote();
            progress::after_change(session, out)
        }
        Err(StoreError::EmptyName) if !session.config().strict => {
            debug!("empty name ignored");
            Ok(())
        }
        Err(err) => {
            writeln!(out, "{} {err}", "✗".red())?;
            Ok(())
        }
    }
}
