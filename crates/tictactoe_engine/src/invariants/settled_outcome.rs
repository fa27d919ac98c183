//! Settled outcome invariant: a won game has exactly one winner, who
//! placed the last mark.

use super::super::{GameState, Player, rules};
use super::Invariant;

/// Invariant: at most one player holds a line, and the holder moved last.
///
/// Play stops at the first completed line, so the loser can never have
/// completed one, and the winner's mark is always the most recent.
pub struct SettledOutcomeInvariant;

impl Invariant<GameState> for SettledOutcomeInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let holds_line = |player: Player| {
            rules::LINES.iter().any(|line| {
                line.iter()
                    .all(|pos| board.get(*pos).player() == Some(player))
            })
        };

        let x = board.count(Player::X);
        let o = board.count(Player::O);
        match (holds_line(Player::X), holds_line(Player::O)) {
            (true, true) => false,
            (true, false) => x == o + 1,
            (false, true) => x == o,
            (false, false) => true,
        }
    }

    fn description() -> &'static str {
        "At most one player completes a line, and that player moved last"
    }
}
