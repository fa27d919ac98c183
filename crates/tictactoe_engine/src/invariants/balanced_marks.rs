//! Balanced marks invariant: X never trails O and never leads by two.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X count minus O count is 0 or 1.
///
/// X moves first and players alternate, so no other difference is
/// reachable.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
