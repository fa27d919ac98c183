//! Serializable view of a [`GameState`] for UIs and test harnesses.
//!
//! ```json
//! { "board": [null, "X", "O", null, null, null, null, null, null],
//!   "nextMark": "X",
//!   "status": "in_progress" }
//! ```

use super::error::SnapshotError;
use super::invariants::{self, GameStateInvariants, InvariantSet};
use super::{Board, GameState, GameStatus, Mark, Player, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Wire form of a game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum StatusTag {
    /// Game is ongoing.
    #[serde(rename = "in_progress")]
    InProgress,
    /// Game ended in a draw.
    #[serde(rename = "draw")]
    Draw,
    /// X won.
    X,
    /// O won.
    O,
}

impl From<GameStatus> for StatusTag {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => StatusTag::InProgress,
            GameStatus::Draw => StatusTag::Draw,
            GameStatus::Won(Player::X) => StatusTag::X,
            GameStatus::Won(Player::O) => StatusTag::O,
        }
    }
}

impl From<StatusTag> for GameStatus {
    fn from(tag: StatusTag) -> Self {
        match tag {
            StatusTag::InProgress => GameStatus::InProgress,
            StatusTag::Draw => GameStatus::Draw,
            StatusTag::X => GameStatus::Won(Player::X),
            StatusTag::O => GameStatus::Won(Player::O),
        }
    }
}

/// Flat, serializable snapshot of a game.
///
/// `next_mark` is carried even when the game is over; it is the player
/// who would have moved next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Nine cells in row-major order, `null` for empty.
    pub board: Vec<Option<Player>>,
    /// Mark that moves next.
    pub next_mark: Mark,
    /// `"in_progress"`, `"draw"`, or the winning mark.
    pub status: StatusTag,
}

impl From<GameState> for GameSnapshot {
    fn from(state: GameState) -> Self {
        Self {
            board: state.board().squares().iter().map(|s| s.player()).collect(),
            next_mark: state.to_move(),
            status: state.status().into(),
        }
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = SnapshotError;

    #[instrument(skip(snapshot), fields(status = ?snapshot.status))]
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let squares: [Square; 9] = snapshot
            .board
            .iter()
            .map(|cell| Square::from(*cell))
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|cells: Vec<Square>| SnapshotError::BoardLength(cells.len()))?;

        let state = GameState::from_parts(Board::from_squares(squares), snapshot.next_mark);

        GameStateInvariants::check_all(&state).map_err(|violations| {
            let description = invariants::describe(&violations);
            warn!(%description, "Rejected snapshot");
            SnapshotError::InvariantViolation(description)
        })?;

        let stated = GameStatus::from(snapshot.status);
        let derived = state.status();
        if stated != derived {
            warn!(?stated, ?derived, "Snapshot status disagrees with board");
            return Err(SnapshotError::StatusMismatch { stated, derived });
        }

        Ok(state)
    }
}
