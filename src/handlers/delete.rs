//! Handler for the `delete` command.

use crate::engine::TaskId;
use crate::handlers::progress;
use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Removes a task from the list.
///
/// # Errors
/// Returns error if writing output fails.
pub fn handle(session: &mut Session, id: TaskId, out: &mut dyn Write) -> Result<()> {
    match session.store_mut().delete_task(id) {
        Ok(task) => {
            writeln!(out, "{} Deleted [{}] {}", "✗".red(), id.to_string().yellow(), task.name)?;
            session.rotate_quote();
            progress::after_change(session, out)
        }
        Err(err) => {
            writeln!(out, "{} {err}", "✗".red())?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::Priority;

    #[test]
    fn test_delete_then_unknown() {
        colored::control::set_override(false);
        let mut session = Session::new(Config { quotes: false, ..Config::default() });
        session.store_mut().add_task("Buy milk", Priority::Low).unwrap();
        session.store_mut().add_task("Walk dog", Priority::High).unwrap();

        let mut out = Vec::new();
        handle(&mut session, TaskId::new(1), &mut out).unwrap();
        handle(&mut session, TaskId::new(1), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("Deleted [#1] Buy milk"));
        assert!(output.contains("0% completed (0/1 tasks)"));
        assert!(output.contains("no task #1"));
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().tasks()[0].name, "Walk dog");
    }
}
