//! Handler for the `stats` command.

use crate::engine::Priority;
use crate::handlers::progress::paint;
use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Displays task counts per priority, highest first.
///
/// # Errors
/// Returns error if writing output fails.
pub fn handle(session: &Session, json: bool, out: &mut dyn Write) -> Result<()> {
    let counts = session.store().priority_counts();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&counts)?)?;
        return Ok(());
    }

    writeln!(out, "{} Tasks by priority:", "📊".cyan())?;
    for priority in Priority::ALL.iter().rev() {
        let bucket = counts.bucket(*priority);
        writeln!(
            out,
            "   {} {} open, {} done",
            paint(*priority, format!("{priority:<8}")),
            bucket.total - bucket.completed,
            bucket.completed
        )?;
    }
    writeln!(out, "   {} {}", format!("{:<8}", "total").dimmed(), counts.total())?;
    Ok(())
}
