//! Handler for the `progress` command, plus the shared progress line.

use crate::engine::{Priority, Progress};
use crate::handlers::quote;
use crate::shell::Session;
use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::io::Write;

const BAR_WIDTH: usize = 20;

/// Displays completion progress over all tasks.
///
/// # Errors
/// Returns error if writing output fails.
pub fn handle(session: &Session, json: bool, out: &mut dyn Write) -> Result<()> {
    let progress = session.store().progress();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&progress)?)?;
        return Ok(());
    }
    write_line(&progress, out)
}

/// What every successful change is followed by: the new quote and progress.
///
/// # Errors
/// Returns error if writing output fails.
pub fn after_change(session: &Session, out: &mut dyn Write) -> Result<()> {
    quote::handle(session, out)?;
    handle(session, false, out)
}

/// Writes `[####----] 33% completed (1/3 tasks)`.
///
/// # Errors
/// Returns error if writing output fails.
pub fn write_line(progress: &Progress, out: &mut dyn Write) -> Result<()> {
    let filled = usize::from(progress.percent) * BAR_WIDTH / 100;
    let bar = format!(
        "{}{}",
        "#".repeat(filled).green(),
        "-".repeat(BAR_WIDTH - filled).dimmed()
    );
    let line = format!(
        "{}% completed ({}/{} tasks)",
        progress.percent, progress.completed, progress.total
    );
    if progress.is_done() {
        writeln!(out, "   [{bar}] {}", line.green())?;
    } else {
        writeln!(out, "   [{bar}] {line}")?;
    }
    Ok(())
}

/// Priority name colored by urgency.
#[must_use]
pub fn priority_label(priority: Priority) -> ColoredString {
    paint(priority, priority.to_string())
}

/// Colors any text the way its priority is shown.
#[must_use]
pub fn paint(priority: Priority, text: String) -> ColoredString {
    match priority {
        Priority::High => text.red(),
        Priority::Medium => text.yellow(),
        Priority::Low => text.dimmed(),
    }
}
