//! Tests for the game engine's move, reset and status behavior.

use tictactoe_engine::{GameEngine, GameState, GameStatus, MoveRejected, Player, Position, Square};

fn play_all(engine: &mut GameEngine, moves: &[usize]) -> GameState {
    let mut state = engine.state();
    for &pos in moves {
        state = engine.try_move(pos).expect("legal move");
    }
    state
}

fn assert_initial(state: &GameState) {
    assert!(state.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(state.to_move(), Player::X);
    assert_eq!(state.status(), GameStatus::InProgress);
}

#[test]
fn test_out_of_range_positions_leave_state_unchanged() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[4, 0]);
    let before = engine.state();

    for pos in [9, 10, 100, usize::MAX] {
        assert_eq!(engine.apply_move(pos), before);
        assert_eq!(engine.try_move(pos), Err(MoveRejected::OutOfRange(pos)));
        assert_eq!(engine.state(), before);
    }
}

#[test]
fn test_terminal_states_reject_every_position() {
    for moves in [
        &[0, 1, 4, 2, 8][..],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8][..],
        &[1, 0, 2, 4, 5, 8][..],
    ] {
        let mut engine = GameEngine::new();
        let finished = play_all(&mut engine, moves);
        assert!(finished.is_over());

        for pos in 0..12 {
            assert_eq!(engine.apply_move(pos), finished);
            assert_eq!(
                engine.try_move(pos),
                Err(MoveRejected::GameOver(finished.status()))
            );
        }
    }
}

#[test]
fn test_reset_from_any_state() {
    let mut engine = GameEngine::new();
    assert_initial(&engine.reset());

    play_all(&mut engine, &[4, 0, 8]);
    assert_initial(&engine.reset());

    play_all(&mut engine, &[0, 1, 4, 2, 8]);
    assert_initial(&engine.reset());
    assert_initial(&engine.state());

    // The fresh game accepts moves again, X first.
    let state = engine.apply_move(8);
    assert_eq!(state.board().get(Position::BottomRight), Square::Occupied(Player::X));
}

#[test]
fn test_turns_strictly_alternate() {
    let mut engine = GameEngine::new();
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    for (n, &pos) in moves.iter().enumerate() {
        let expected = if n % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(engine.to_move(), expected);

        let state = engine.apply_move(pos);
        let placed = Position::from_index(pos).expect("on board");
        assert_eq!(state.board().get(placed), Square::Occupied(expected));
    }
}

#[test]
fn test_rejected_moves_do_not_consume_a_turn() {
    let mut engine = GameEngine::new();
    engine.apply_move(4);
    engine.apply_move(4);
    engine.apply_move(42);

    let state = engine.apply_move(0);
    assert_eq!(state.board().get(Position::TopLeft), Square::Occupied(Player::O));
}

#[test]
fn test_occupied_cell_rejection_is_idempotent() {
    let mut engine = GameEngine::new();
    let after_first = engine.apply_move(4);

    for _ in 0..5 {
        assert_eq!(
            engine.try_move(4),
            Err(MoveRejected::CellOccupied(Position::Center))
        );
        assert_eq!(engine.apply_move(4), after_first);
    }
}

#[test]
fn test_scenario_a_diagonal_win() {
    let mut engine = GameEngine::new();
    let state = play_all(&mut engine, &[0, 1, 4, 2, 8]);
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(
        tictactoe_engine::rules::winning_line(state.board()),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
}

#[test]
fn test_scenario_b_row_win() {
    let mut engine = GameEngine::new();
    let state = play_all(&mut engine, &[0, 3, 1, 4, 2]);
    assert_eq!(state.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_scenario_c_draw() {
    let mut engine = GameEngine::new();
    let state = play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.status(), GameStatus::Draw);
    assert!(state.board().is_full());
}

#[test]
fn test_scenario_d_no_moves_after_win() {
    let mut engine = GameEngine::new();
    let won = play_all(&mut engine, &[0, 1, 4, 2, 8]);

    for pos in Position::valid_moves(won.board()) {
        assert_eq!(
            engine.play(pos),
            Err(MoveRejected::GameOver(GameStatus::Won(Player::X)))
        );
    }
    assert_eq!(engine.state(), won);
}

#[test]
fn test_scenario_e_reset_after_terminal_and_in_progress() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let state = engine.reset();
    assert!(state.board().squares().iter().all(|s| s.player().is_none()));
    assert_eq!(state.status(), GameStatus::InProgress);

    play_all(&mut engine, &[2]);
    assert_initial(&engine.reset());
}

#[test]
fn test_o_can_win() {
    let mut engine = GameEngine::new();
    let state = play_all(&mut engine, &[1, 0, 2, 4, 5, 8]);
    assert_eq!(state.status(), GameStatus::Won(Player::O));
    assert_eq!(state.status_message(), "Player O wins!");
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    let mut engine = GameEngine::new();
    // X: 0 2 3 7 6 ; O: 1 4 5 8 -> X completes the left column last.
    let state = play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 8, 6]);
    assert!(state.board().is_full());
    assert_eq!(state.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_status_messages() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.state().status_message(), "Player X's turn");
    assert_eq!(engine.apply_move(4).status_message(), "Player O's turn");

    engine.reset();
    let state = play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.status_message(), "It's a draw!");
}

#[test]
fn test_snapshots_are_independent_of_engine() {
    let mut engine = GameEngine::new();
    let snapshot = engine.apply_move(0);
    engine.apply_move(1);
    engine.reset();

    assert_eq!(snapshot.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(snapshot.board().get(Position::TopCenter), Square::Empty);
}

#[test]
fn test_board_indexing_matches_move_bounds() {
    let mut engine = GameEngine::new();
    let state = engine.apply_move(8);
    assert_eq!(state.board().get_index(8), Some(Square::Occupied(Player::X)));
    assert_eq!(state.board().get_index(0), Some(Square::Empty));

    assert_eq!(state.board().get_index(9), None);
    assert_eq!(engine.apply_move(9), state);
}

#[test]
fn test_status_winner() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.status().winner(), None);

    let won = play_all(&mut engine, &[1, 0, 2, 4, 5, 8]);
    assert_eq!(won.status().winner(), Some(Player::O));

    engine.reset();
    let drawn = play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(drawn.status().winner(), None);
    assert!(drawn.status().is_terminal());
}
