//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use super::error::MoveRejected;
use super::invariants::{GameStateInvariants, InvariantSet, InvariantViolation};
use super::{GameState, Player, Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejected>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not reached a terminal status.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with the terminal status when the game is over.
    pub fn check(state: &GameState) -> Result<(), MoveRejected> {
        let status = state.status();
        if status.is_terminal() {
            Err(MoveRejected::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names one of the nine squares.
pub struct OnBoard;

impl OnBoard {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveRejected> {
        Position::from_index(index).ok_or(MoveRejected::OutOfRange(index))
    }
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects when the square already holds a mark.
    pub fn check(state: &GameState, pos: Position) -> Result<(), MoveRejected> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejected::CellOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: game not over, index on the
/// board, square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, yielding the target position.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, index: usize) -> Result<Position, MoveRejected> {
        GameNotOver::check(state)?;
        let pos = OnBoard::check(index)?;
        SquareIsEmpty::check(state, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a move at a raw board index.
///
/// Preconditions:
/// - Game is not over
/// - Index is on the board
/// - Square is empty
///
/// Postconditions:
/// - Exactly one empty square gained the mover's mark; nothing else changed
/// - All [`GameStateInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, action: &usize) -> Result<(), MoveRejected> {
        LegalMove::check(state, *action).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !single_placement(before, after) {
            violations.push(InvariantViolation::new(
                "Move places exactly one mark for the player to move",
            ));
        }

        if let Err(mut broken) = GameStateInvariants::check_all(after) {
            violations.append(&mut broken);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}

/// True when `after` differs from `before` by one square going from empty
/// to the mark of `before`'s player to move.
fn single_placement(before: &GameState, after: &GameState) -> bool {
    let mover: Player = before.to_move();
    let changed: Vec<(Square, Square)> = before
        .board()
        .squares()
        .iter()
        .zip(after.board().squares())
        .filter(|(b, a)| b != a)
        .map(|(b, a)| (*b, *a))
        .collect();

    matches!(changed.as_slice(), [(Square::Empty, Square::Occupied(p))] if *p == mover)
}
