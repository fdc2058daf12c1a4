#![cfg(feature = "serde")]

use chess_rules::board::{Color, MoveKind, Square};
use chess_rules::engine::{Game, GameConfig, GameSnapshot, GameStatus};

#[test]
fn snapshot_serializes_to_json() {
    let mut game = Game::new();
    game.select(Square(6, 4)).unwrap();
    let snapshot = game.snapshot();

    let json = serde_json::to_string(&snapshot).expect("serialize");
    let back: GameSnapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, snapshot);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["turn"], "White");
    assert_eq!(value["status"], "InProgress");
    assert_eq!(value["squares"].as_array().map(Vec::len), Some(64));
}

#[test]
fn snapshot_carries_markers_and_scores() {
    let mut game = Game::new();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")] {
        game.select(from.parse().unwrap()).unwrap();
        game.move_to(to.parse().unwrap()).unwrap();
    }
    game.select("d8".parse().unwrap()).unwrap();
    let snapshot = game.snapshot();

    assert_eq!(snapshot.player(Color::White).material, 100);
    assert_eq!(
        snapshot.square("d5".parse().unwrap()).unwrap().marker,
        Some(MoveKind::Capture)
    );
    assert_eq!(snapshot.status, GameStatus::InProgress);
}

#[test]
fn config_round_trips() {
    let json = serde_json::to_string(&GameConfig::strict()).unwrap();
    assert_eq!(json, r#"{"strict_castling":true}"#);
    let back: GameConfig = serde_json::from_str(&json).unwrap();
    assert!(back.strict_castling);
}
