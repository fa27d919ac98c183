//! Rejection and validation errors.
//!
//! None of these are failures of the engine itself. They describe input
//! the engine declined to act on.

use super::{GameStatus, Position};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The index does not name a square (valid range is 0-8).
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),
}

impl std::error::Error for MoveRejected {}

/// Why a serialized snapshot could not be turned back into a game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// The board did not have exactly nine cells.
    #[display("Board must have 9 cells, found {}", _0)]
    BoardLength(usize),

    /// The recorded status disagrees with the one the board implies.
    #[display("Status {} does not match board (expected {})", stated, derived)]
    StatusMismatch {
        /// Status as written in the snapshot.
        stated: GameStatus,
        /// Status computed from the snapshot's board.
        derived: GameStatus,
    },

    /// The board or turn could not arise from legal play.
    #[display("Unreachable position: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SnapshotError {}
