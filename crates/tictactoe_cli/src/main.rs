//! Tic-tac-toe terminal front end.
//!
//! Reads moves from stdin (or `--moves`) and renders the board on stdout.
//! Logs go to stderr, filtered by `RUST_LOG`.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console::Console;
use std::io;
use tictactoe_engine::GameSnapshot;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.schema {
        let schema = schemars::schema_for!(GameSnapshot);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock(), cli.json);

    match cli.moves {
        Some(moves) => {
            info!(count = moves.len(), "Playing scripted moves");
            console.play_script(&moves)?;
        }
        None => {
            info!("Starting interactive game");
            console.run(io::stdin().lock())?;
        }
    }

    Ok(())
}
