//! Session shell: reads one command per line and dispatches it.

pub mod commands;

use crate::config::Config;
use crate::engine::{Filter, TaskStore};
use crate::handlers;
use crate::quotes::QuotePicker;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use commands::{tokenize, Command, Line};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything one run of the shell owns: the store, the view filter and
/// the quote on display.
pub struct Session {
    config: Config,
    store: TaskStore,
    filter: Filter,
    quotes: Option<QuotePicker>,
}

impl Session {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let quotes = config.quotes.then(|| QuotePicker::new(config.seed));
        Self {
            config,
            store: TaskStore::new(),
            filter: Filter::new(),
            quotes,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }

    /// The quote on display, or `None` when quotes are disabled.
    #[must_use]
    pub fn quote(&self) -> Option<&'static str> {
        self.quotes.as_ref().map(QuotePicker::current)
    }

    /// Picks a new quote. Called after every successful change.
    pub fn rotate_quote(&mut self) {
        if let Some(picker) = self.quotes.as_mut() {
            picker.rotate();
        }
    }

    /// Parses and runs one line.
    ///
    /// A line clap rejects is answered with its usage message and the
    /// session continues.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    pub fn execute(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let words = tokenize(line);
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match Line::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                debug!(kind = ?err.kind(), "unparsed line");
                write!(out, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        if command.is_mutation() {
            dispatch_write_ops(self, command, out)?;
            return Ok(Flow::Continue);
        }
        dispatch_read_ops(self, command, out)
    }
}

fn dispatch_write_ops(session: &mut Session, cmd: Command, out: &mut dyn Write) -> Result<()> {
    match cmd {
        Command::Add { priority, name } => {
            handlers::add::handle(session, &name.join(" "), priority, out)
        }
        Command::Toggle { id } => handlers::toggle::handle(session, id, out),
        Command::Delete { id } => handlers::delete::handle(session, id, out),
        _ => unreachable!("Invalid write command dispatch"),
    }
}

fn dispatch_read_ops(session: &mut Session, cmd: Command, out: &mut dyn Write) -> Result<Flow> {
    match cmd {
        Command::List { json } => handlers::list::handle(session, json, out)?,
        Command::Search { text } => handlers::filter::search(session, &text.join(" "), out)?,
        Command::Priority { level } => handlers::filter::priority(session, level, out)?,
        Command::Clear => handlers::filter::clear(session, out)?,
        Command::Progress { json } => handlers::progress::handle(session, json, out)?,
        Command::Stats { json } => handlers::stats::handle(session, json, out)?,
        Command::Quote => handlers::quote::handle(session, out)?,
        Command::Quit => return Ok(Flow::Quit),
        _ => unreachable!("Invalid read command dispatch"),
    }
    Ok(Flow::Continue)
}

/// Runs a session until `quit` or end of input.
///
/// With `interactive` set, a banner and a `> ` prompt are shown.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()> {
    info!(interactive, "session started");
    if interactive {
        banner(session, out)?;
    }

    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        if interactive {
            write!(out, "{} ", ">".cyan())?;
            out.flush()?;
        }

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read command")?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(line = line_no, "skipped line that is not valid UTF-8");
            writeln!(out, "{} line {line_no} is not valid UTF-8, skipped", "✗".red())?;
            continue;
        };

        if session.execute(line, out)? == Flow::Quit {
            break;
        }
        out.flush()?;
    }

    info!(tasks = session.store().len(), "session ended");
    Ok(())
}

fn banner(session: &Session, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{} Task List", "📋".cyan())?;
    handlers::quote::handle(session, out)?;
    handlers::progress::handle(session, false, out)?;
    writeln!(out, "   {}", "Type `help` for commands.".dimmed())?;
    Ok(())
}
