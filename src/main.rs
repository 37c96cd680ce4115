use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use tasklist::config::{Config, ConfigArgs};
use tasklist::shell::{self, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tasklist",
    version,
    about = "A task list for one session: add, check off, filter, track progress"
)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(cli.config);

    init_tracing(&config);
    if !config.color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut session = Session::new(config);
    shell::run(&mut session, stdin.lock(), &mut io::stdout().lock(), interactive)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env("TASKLIST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
