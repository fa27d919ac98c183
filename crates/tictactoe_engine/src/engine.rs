//! The tic-tac-toe game engine.

use super::contracts::LegalMove;
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
use super::error::MoveRejected;
use super::{Board, GameState, GameStatus, Player, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the single [`GameState`] and is the only thing that mutates it.
/// Every operation returns a copy of the resulting state.
///
/// Invalid moves have two entry points sharing one validation path:
/// [`apply_move`](Self::apply_move) ignores them and returns the unchanged
/// state, [`try_move`](Self::try_move) reports why.
///
/// The engine is not synchronized. Hosts that share it across threads
/// wrap it in a mutex.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Resumes from an existing state, such as a deserialized snapshot.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// Returns the game status, derived from the board.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Places the current player's mark at `position` (0-8).
    ///
    /// A rejected move leaves the game untouched and the unchanged state is
    /// returned; use [`try_move`](Self::try_move) to learn why.
    pub fn apply_move(&mut self, position: usize) -> GameState {
        self.try_move(position).unwrap_or(self.state)
    }

    /// Places the current player's mark at `position` (0-8).
    ///
    /// On success the turn passes to the opponent, including on the move
    /// that ends the game.
    ///
    /// # Errors
    ///
    /// - [`MoveRejected::GameOver`] once the game is won or drawn
    /// - [`MoveRejected::OutOfRange`] if `position` is greater than 8
    /// - [`MoveRejected::CellOccupied`] if the square already holds a mark
    ///
    /// Checked in that order. The state is unchanged on error.
    #[instrument(skip(self), fields(player = %self.state.to_move()))]
    pub fn try_move(&mut self, position: usize) -> Result<GameState, MoveRejected> {
        let pos = LegalMove::check(&self.state, position).inspect_err(|reason| {
            debug!(%reason, "Move rejected");
        })?;

        let before = self.state;
        let mut next = before;
        next.place(pos);

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, &next);
            debug_assert!(checked.is_ok(), "Move postcondition violated: {:?}", checked);
        }

        self.state = next;
        debug!(position = %pos, board = %self.state.board().display(), "Move applied");

        match self.state.status() {
            GameStatus::InProgress => {}
            GameStatus::Won(winner) => info!(%winner, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }

        Ok(self.state)
    }

    /// Places the current player's mark at a named position.
    ///
    /// # Errors
    ///
    /// As [`try_move`](Self::try_move); never `OutOfRange`.
    pub fn play(&mut self, position: Position) -> Result<GameState, MoveRejected> {
        self.try_move(position.to_index())
    }

    /// Positions the current player may still take. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.state.board())
        }
    }

    /// Discards the current game and starts a new one with X to move.
    #[instrument(skip(self), fields(previous = %self.state.status()))]
    pub fn reset(&mut self) -> GameState {
        self.state = GameState::new();
        info!("Game reset");
        self.state
    }
}
