//! Pure tic-tac-toe game engine.
//!
//! [`GameEngine`] owns the board, turn order and terminal-state detection.
//! A presentation layer drives it through three calls and renders the
//! [`GameState`] snapshots it hands back:
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for pos in [0, 1, 4, 2, 8] {
//!     engine.apply_move(pos);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//!
//! // Terminal: further moves are ignored.
//! let state = engine.apply_move(5);
//! assert!(state.board().is_empty(tictactoe_engine::Position::MiddleRight));
//!
//! let state = engine.reset();
//! assert_eq!(state.status(), GameStatus::InProgress);
//! ```
//!
//! Status is never stored: [`GameState::status`] evaluates the board each
//! time, so it cannot drift from the marks actually placed.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
mod position;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, OnBoard, SquareIsEmpty};
pub use engine::GameEngine;
pub use error::{MoveRejected, SnapshotError};
pub use position::Position;
pub use snapshot::{GameSnapshot, StatusTag};
pub use types::{Board, GameState, GameStatus, Player, Square};

/// Alias for clarity where the symbol matters more than who holds it.
pub type Mark = Player;
