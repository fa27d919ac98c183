//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Status is never stored anywhere else;
//! every caller that needs it asks [`evaluate`].

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from the board.
///
/// A completed line wins even on a full board; a full board without a
/// line is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
