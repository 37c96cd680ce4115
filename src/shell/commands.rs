//! Command-line grammar for one line of a session.

use crate::engine::{Priority, PriorityFilter, TaskId};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tasklist", no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task priority (defaults to the configured default)
        #[arg(long, short = 'p', value_enum)]
        priority: Option<Priority>,
        /// What needs to be done
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// Mark a task done, or not done again
    #[command(visible_alias = "done")]
    Toggle {
        #[arg(allow_negative_numbers = true)]
        id: TaskId,
    },
    /// Remove a task
    #[command(visible_alias = "rm")]
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: TaskId,
    },
    /// Show progress and the tasks matching the current filter
    #[command(visible_alias = "ls")]
    List {
        #[arg(long)]
        json: bool,
    },
    /// Only show tasks whose name contains this text (no text clears it)
    Search { text: Vec<String> },
    /// Only show tasks of this priority
    Priority {
        #[arg(value_enum)]
        level: PriorityFilter,
    },
    /// Reset search text and priority filter
    Clear,
    /// Show completion progress
    Progress {
        #[arg(long)]
        json: bool,
    },
    /// Show task counts per priority
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Show the current motivational quote
    Quote,
    /// End the session
    #[command(visible_alias = "exit")]
    Quit,
}

impl Command {
    /// Returns true for commands that change the task list.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Add { .. } | Self::Toggle { .. } | Self::Delete { .. })
    }
}

/// Splits a line into words. Double quotes group words and keep their
/// whitespace verbatim; an unterminated quote runs to the end of the line.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut started = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if started {
                    words.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }
    if started {
        words.push(current);
    }
    words
}
