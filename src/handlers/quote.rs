//! Handler for the `quote` command.

use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Shows the quote on display. Writes nothing when quotes are disabled.
///
/// # Errors
/// Returns error if writing output fails.
pub fn handle(session: &Session, out: &mut dyn Write) -> Result<()> {
    if let Some(quote) = session.quote() {
        writeln!(out, "   {}", format!("\"{quote}\"").italic().dimmed())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::quotes::QUOTES;

    fn render(session: &Session) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        handle(session, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_shows_a_known_quote() {
        let session = Session::new(Config { seed: Some(1), ..Config::default() });
        let output = render(&session);
        assert!(QUOTES.iter().any(|q| output.contains(q)));
    }

    #[test]
    fn test_disabled_quotes_print_nothing() {
        let session = Session::new(Config { quotes: false, ..Config::default() });
        assert_eq!(render(&session), "");
    }
}
