//! Session configuration: command-line flags with environment fallbacks.

use crate::engine::Priority;
use clap::builder::FalseyValueParser;
use clap::Args;

/// Flags shared by every session.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Priority given to tasks added without `-p`
    #[arg(long, value_enum, default_value_t = Priority::Medium, env = "TASKLIST_DEFAULT_PRIORITY")]
    pub default_priority: Priority,

    /// Report empty task names instead of silently ignoring them
    #[arg(long, env = "TASKLIST_STRICT", value_parser = FalseyValueParser::new())]
    pub strict: bool,

    /// Do not show motivational quotes
    #[arg(long, env = "TASKLIST_NO_QUOTES", value_parser = FalseyValueParser::new())]
    pub no_quotes: bool,

    /// Seed for the quote picker (reproducible sessions)
    #[arg(long, env = "TASKLIST_SEED")]
    pub seed: Option<u64>,

    /// Disable colored output (`NO_COLOR` is honoured by the terminal layer)
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved settings a `Session` runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_priority: Priority,
    pub strict: bool,
    pub quotes: bool,
    pub seed: Option<u64>,
    pub color: bool,
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_priority: Priority::Medium,
            strict: false,
            quotes: true,
            seed: None,
            color: true,
            verbose: 0,
        }
    }
}

impl From<ConfigArgs> for Config {
    fn from(args: ConfigArgs) -> Self {
        Self {
            default_priority: args.default_priority,
            strict: args.strict,
            quotes: !args.no_quotes,
            seed: args.seed,
            color: !args.no_color,
            verbose: args.verbose,
        }
    }
}

impl Config {
    /// Default `tracing` directive when `TASKLIST_LOG` is not set.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "tasklist=warn",
            1 => "tasklist=info",
            2 => "tasklist=debug",
            _ => "tasklist=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::Mutex;

    /// Serializes tests that read or write process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 4] = [
        "TASKLIST_DEFAULT_PRIORITY",
        "TASKLIST_STRICT",
        "TASKLIST_NO_QUOTES",
        "TASKLIST_SEED",
    ];

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    /// Parses `args` with exactly the given environment variables set.
    fn parse_with_env(args: &[&str], env: &[(&str, &str)]) -> Result<Config, clap::Error> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
        let saved: Vec<_> = env
            .iter()
            .map(|(key, _)| (*key, std::env::var_os(key)))
            .collect();
        for (key, value) in env {
            std::env::set_var(key, value);
        }

        let mut argv = vec!["tasklist"];
        argv.extend_from_slice(args);
        let parsed = TestCli::try_parse_from(argv).map(|cli| cli.config.into());

        for (key, previous) in saved {
            match previous {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        parsed
    }

    fn parse(args: &[&str]) -> Config {
        parse_with_env(args, &[]).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.default_priority, Priority::Medium);
        assert!(!config.strict);
        assert!(config.quotes);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_directive(), "tasklist=warn");
    }

    #[test]
    fn test_flags() {
        let config = parse(&[
            "--default-priority",
            "high",
            "--strict",
            "--no-quotes",
            "--seed",
            "42",
            "-vv",
        ]);
        assert_eq!(config.default_priority, Priority::High);
        assert!(config.strict);
        assert!(!config.quotes);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_directive(), "tasklist=debug");
    }

    #[test]
    fn test_unknown_priority_rejected() {
        assert!(parse_with_env(&["--default-priority", "urgent"], &[]).is_err());
    }

    #[test]
    fn test_env_flags_accept_any_truthy_value() {
        let config = parse_with_env(
            &[],
            &[("TASKLIST_STRICT", "1"), ("TASKLIST_NO_QUOTES", "yes")],
        )
        .unwrap();
        assert!(config.strict);
        assert!(!config.quotes);

        let config = parse_with_env(
            &[],
            &[("TASKLIST_STRICT", "0"), ("TASKLIST_NO_QUOTES", "false")],
        )
        .unwrap();
        assert!(!config.strict);
        assert!(config.quotes);
    }

    #[test]
    fn test_env_default_priority_and_seed() {
        let config = parse_with_env(
            &[],
            &[("TASKLIST_DEFAULT_PRIORITY", "low"), ("TASKLIST_SEED", "9")],
        )
        .unwrap();
        assert_eq!(config.default_priority, Priority::Low);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_no_color_env_does_not_block_startup() {
        let config = parse_with_env(&[], &[("NO_COLOR", "1")]).unwrap();
        assert!(config.color);
        assert!(!parse_with_env(&["--no-color"], &[]).unwrap().color);
    }
}
