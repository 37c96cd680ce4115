//! Handler for the `list` command.

use crate::engine::{Filter, Progress, Task};
use crate::handlers::progress::{self, paint};
use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ListReport<'a> {
    progress: Progress,
    filter: &'a Filter,
    tasks: Vec<&'a Task>,
}

/// Shows progress and every task the current filter lets through.
///
/// Progress always covers the whole list; only the rows are filtered.
///
/// # Errors
/// Returns error if writing output fails.
pub fn handle(session: &Session, json: bool, out: &mut dyn Write) -> Result<()> {
    let store = session.store();
    let filter = session.filter();
    let tasks = store.filtered_view(filter);

    if json {
        let report = ListReport {
            progress: store.progress(),
            filter,
            tasks,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "{} Task List", "📋".cyan())?;
    progress::write_line(&store.progress(), out)?;
    if filter.is_active() {
        writeln!(
            out,
            "   {}",
            format!(
                "filter: search \"{}\", priority {}",
                filter.search_text(),
                filter.priority()
            )
            .dimmed()
        )?;
    }

    if tasks.is_empty() {
        let hint = if store.is_empty() {
            "(No tasks yet. Add one with `add <name>`.)"
        } else {
            "(No tasks match the current filter.)"
        };
        writeln!(out, "   {hint}")?;
        return Ok(());
    }

    for task in tasks {
        write_row(task, out)?;
    }
    Ok(())
}

fn write_row(task: &Task, out: &mut dyn Write) -> Result<()> {
    let id = task.id.to_string();
    if task.completed {
        writeln!(
            out,
            "   [x] {} {} ({})",
            id.dimmed(),
            task.name.as_str().strikethrough().dimmed(),
            task.priority.to_string().dimmed()
        )?;
    } else {
        writeln!(
            out,
            "   [ ] {} {} ({})",
            id.yellow(),
            task.name,
            paint(task.priority, task.priority.to_string())
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::{Priority, PriorityFilter};

    fn sample_session() -> Session {
        let mut session = Session::new(Config { quotes: false, ..Config::default() });
        let store = session.store_mut();
        store.add_task("Buy milk", Priority::Low).unwrap();
        let bills = store.add_task("Pay bills", Priority::High).unwrap();
        store.add_task("Walk dog", Priority::High).unwrap();
        store.toggle_task(bills).unwrap();
        session
    }

    fn render(session: &Session) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        handle(session, false, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_in_store_order() {
        let output = render(&sample_session());
        assert!(output.contains("33% completed (1/3 tasks)"));
        assert!(output.contains("[ ] #1 Buy milk (low)"));
        assert!(output.contains("[x] #2 Pay bills (high)"));
        assert!(output.contains("[ ] #3 Walk dog (high)"));
        assert!(output.find("Buy milk").unwrap() < output.find("Walk dog").unwrap());
        assert!(!output.contains("filter:"));
    }

    #[test]
    fn test_priority_filter_hides_rows_not_progress() {
        let mut session = sample_session();
        session.filter_mut().set_priority(PriorityFilter::High);
        let output = render(&session);

        assert!(output.contains("33% completed (1/3 tasks)"));
        assert!(!output.contains("Buy milk"));
        assert!(output.contains("Pay bills"));
        assert!(output.contains("Walk dog"));
        assert!(output.contains("priority high"));
    }

    #[test]
    fn test_placeholders() {
        let empty = Session::new(Config { quotes: false, ..Config::default() });
        assert!(render(&empty).contains("No tasks yet"));

        let mut session = sample_session();
        session.filter_mut().set_search("groceries");
        assert!(render(&session).contains("No tasks match"));
    }

    #[test]
    fn test_json_report() {
        let mut session = sample_session();
        session.filter_mut().set_search("bills");
        let mut out = Vec::new();
        handle(&session, true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["progress"]["percent"], 33);
        assert_eq!(value["filter"]["search_text"], "bills");
        assert_eq!(value["filter"]["priority"], "all");
        let tasks = value["tasks"].as_array().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["id"], 2);
        assert_eq!(tasks[0]["name"], "Pay bills");
        assert_eq!(tasks[0]["completed"], true);
        assert_eq!(tasks[0]["priority"], "high");
    }
}
