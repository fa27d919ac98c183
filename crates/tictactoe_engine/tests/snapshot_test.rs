//! Tests for the serialized game-state format.

use serde_json::json;
use tictactoe_engine::{GameEngine, GameSnapshot, GameState, GameStatus, Player, SnapshotError};

#[test]
fn test_initial_state_wire_format() {
    let value = serde_json::to_value(GameEngine::new().state()).unwrap();
    assert_eq!(
        value,
        json!({
            "board": [null, null, null, null, null, null, null, null, null],
            "nextMark": "X",
            "status": "in_progress",
        })
    );
}

#[test]
fn test_in_progress_wire_format() {
    let mut engine = GameEngine::new();
    engine.apply_move(0);
    engine.apply_move(4);

    let value = serde_json::to_value(engine.state()).unwrap();
    assert_eq!(
        value,
        json!({
            "board": ["X", null, null, null, "O", null, null, null, null],
            "nextMark": "X",
            "status": "in_progress",
        })
    );
}

#[test]
fn test_terminal_wire_status() {
    let mut engine = GameEngine::new();
    for pos in [0, 1, 4, 2, 8] {
        engine.apply_move(pos);
    }
    let value = serde_json::to_value(engine.state()).unwrap();
    assert_eq!(value["status"], json!("X"));
    assert_eq!(value["nextMark"], json!("O"));

    engine.reset();
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        engine.apply_move(pos);
    }
    let value = serde_json::to_value(engine.state()).unwrap();
    assert_eq!(value["status"], json!("draw"));
}

#[test]
fn test_deserialize_resumes_game() {
    let text = r#"{
        "board": ["X", "O", null, null, "X", null, null, null, null],
        "nextMark": "O",
        "status": "in_progress"
    }"#;
    let state: GameState = serde_json::from_str(text).unwrap();
    assert_eq!(state.to_move(), Player::O);

    let mut engine = GameEngine::from_state(state);
    engine.apply_move(2);
    let state = engine.apply_move(8);
    assert_eq!(state.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_deserialize_round_trips_every_reachable_step() {
    let mut engine = GameEngine::new();
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        let state = engine.apply_move(pos);
        let text = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&text).unwrap();
        assert_eq!(back, state);
    }
}

#[test]
fn test_deserialize_rejects_wrong_status() {
    let text = r#"{
        "board": ["X", "X", "X", "O", "O", null, null, null, null],
        "nextMark": "O",
        "status": "in_progress"
    }"#;
    let err = serde_json::from_str::<GameState>(text).unwrap_err();
    assert!(err.to_string().contains("does not match board"), "{}", err);
}

#[test]
fn test_deserialize_rejects_wrong_turn() {
    let text = r#"{
        "board": ["X", null, null, null, null, null, null, null, null],
        "nextMark": "X",
        "status": "in_progress"
    }"#;
    assert!(serde_json::from_str::<GameState>(text).is_err());
}

#[test]
fn test_deserialize_rejects_unknown_status() {
    let text = r#"{ "board": [null, null, null, null, null, null, null, null, null],
                   "nextMark": "X", "status": "paused" }"#;
    assert!(serde_json::from_str::<GameState>(text).is_err());
}

#[test]
fn test_snapshot_conversion_reports_length() {
    let snapshot = GameSnapshot {
        board: vec![None; 10],
        next_mark: Player::X,
        status: tictactoe_engine::StatusTag::InProgress,
    };
    assert_eq!(
        GameState::try_from(snapshot),
        Err(SnapshotError::BoardLength(10))
    );
}

#[test]
fn test_schema_describes_fields() {
    let schema = serde_json::to_value(schemars::schema_for!(GameSnapshot)).unwrap();
    let properties = &schema["properties"];
    assert!(properties.get("board").is_some());
    assert!(properties.get("nextMark").is_some());
    assert!(properties.get("status").is_some());
}
