//! Strictly Referee - command-line entry point.
//!
//! Plays one best-of-three game on stdin/stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use strictly_referee::{Cli, GameSession, RandomOpponent};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the game transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!(seed = ?cli.seed, json = cli.json, "Starting strictly_referee");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let opponent = RandomOpponent::new(cli.seed);

    let summary = GameSession::new(stdin.lock(), stdout.lock(), opponent).run()?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{json}")?;
    }

    Ok(())
}
