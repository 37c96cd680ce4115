//! Handler for the `toggle` command.

use crate::engine::TaskId;
use crate::handlers::progress;
use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Flips a task between done and not done.
///
/// # Errors
/// Returns error if writing output fails.
pub fn handle(session: &mut Session, id: TaskId, out: &mut dyn Write) -> Result<()> {
    let completed = match session.store_mut().toggle_task(id) {
        Ok(completed) => completed,
        Err(err) => {
            writeln!(out, "{} {err}", "✗".red())?;
            return Ok(());
        }
    };

    let name = session
        .store()
        .get(id)
        .map(|t| t.name.clone())
        .unwrap_or_default();
    if completed {
        writeln!(out, "{} Completed [{}] {}", "✓".green(), id.to_string().yellow(), name)?;
    } else {
        writeln!(out, "{} Reopened [{}] {}", "○".dimmed(), id.to_string().yellow(), name)?;
    }

    session.rotate_quote();
    progress::after_change(session, out)
}
