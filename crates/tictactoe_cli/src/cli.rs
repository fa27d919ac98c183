//! Command-line interface for the tic-tac-toe terminal front end.

use clap::Parser;

/// Play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print the game state as JSON after every command
    #[arg(long)]
    pub json: bool,

    /// Play a comma-separated list of moves (e.g. "0,4,8") and exit
    #[arg(long, value_delimiter = ',')]
    pub moves: Option<Vec<String>>,

    /// Print the JSON schema of the game state and exit
    #[arg(long)]
    pub schema: bool,
}
