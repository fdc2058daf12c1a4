use std::thread;

use chess_rules::board::{Color, Square};
use chess_rules::engine::{GameStatus, Rejection, SharedGame};

fn sq(s: &str) -> Square {
    s.parse().expect("bad square")
}

#[test]
fn concurrent_players_alternate_through_the_lock() {
    let shared = SharedGame::new();
    let white_line = [("e2", "e4"), ("g1", "f3"), ("f1", "c4")];
    let black_line = [("e7", "e5"), ("b8", "c6"), ("g8", "f6")];

    let spawn = |color: Color, line: [(&'static str, &'static str); 3]| {
        let handle = shared.clone();
        thread::spawn(move || {
            for (from, to) in line {
                // Wait for our turn, then play under a single lock
                loop {
                    let played = handle.with(|game| {
                        if game.turn() != color {
                            return None;
                        }
                        game.select(sq(from)).ok()?;
                        game.move_to(sq(to)).ok()
                    });
                    if played.is_some() {
                        break;
                    }
                    thread::yield_now();
                }
            }
        })
    };

    let white = spawn(Color::White, white_line);
    let black = spawn(Color::Black, black_line);
    white.join().unwrap();
    black.join().unwrap();

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.turn, Color::White);
    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert_eq!(shared.with(|game| game.history().len()), 6);
}

#[test]
fn shared_commands_report_rejections() {
    let shared = SharedGame::new();
    assert_eq!(shared.move_to(sq("e4")), Err(Rejection::NothingSelected));
    assert!(shared.select(sq("e2")).unwrap().is_some());
    assert!(shared.move_to(sq("e4")).is_ok());

    assert_eq!(shared.resign(), Ok(Color::Black));
    assert!(matches!(
        shared.play(sq("e7"), sq("e5")),
        Err(Rejection::GameOver { .. })
    ));
    shared.reset();
    assert_eq!(shared.snapshot().status, GameStatus::InProgress);
    assert_eq!(shared.snapshot().player(Color::White).wins, 1);
}
