//! Turn parity invariant: the player to move follows from the mark counts.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X is to move exactly when both players have placed the same
/// number of marks.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        let expected = if x == o { Player::X } else { Player::O };
        state.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
