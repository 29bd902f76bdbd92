//! Integration tests for the match controller and the self-play binary.
//!
//! Drives matches through the public API the way a front end would: pick a
//! difficulty by name, choose a symbol, alternate human moves and computer
//! replies, then feed the outcome to the scoreboard.

use marubatsu_ai::score::Scoreboard;
use marubatsu_ai::{Difficulty, Game, GameError, Mark, Move, MoveEvent, Phase};
use std::process::Command;

/// Plays the first empty cell (row-major) for the human until the match ends.
fn play_out(game: &mut Game) -> MoveEvent {
    loop {
        let mv = game.board().empty_cells()[0];
        let event = game.apply_human_move(mv).unwrap();
        if event.is_terminal() {
            return event;
        }
        if game.awaiting_computer() {
            let event = game.computer_reply().unwrap();
            if event.is_terminal() {
                return event;
            }
        }
    }
}

#[test]
fn test_full_match_for_every_computer_difficulty() {
    for name in ["easy", "medium", "impossible"] {
        let difficulty: Difficulty = name.parse().unwrap();
        for human in [Mark::X, Mark::O] {
            let (mut game, _) = Game::new_match(human, difficulty.controller(true)).unwrap();
            let event = play_out(&mut game);
            assert!(game.is_over());
            assert!(!game.awaiting_computer());

            if difficulty == Difficulty::Minimax {
                assert_ne!(event, MoveEvent::Won(human), "{} lost to row-major play", name);
            }

            // 終局後の着手は拒否され、盤面は変わらない
            if let Some(&mv) = game.board().empty_cells().first() {
                let before = *game.board();
                assert!(matches!(
                    game.apply_human_move(mv),
                    Err(GameError::InvalidMove { .. })
                ));
                assert_eq!(game.board(), &before);
            }
        }
    }
}

#[test]
fn test_outcomes_feed_scoreboard() {
    let mut scores = Scoreboard::new();
    let difficulty = Difficulty::Minimax;
    for _ in 0..3 {
        let (mut game, _) = Game::new_match(Mark::X, difficulty.controller(false)).unwrap();
        let event = play_out(&mut game);
        scores.record(difficulty, Mark::X, event);
    }
    let tally = scores.get(difficulty);
    assert_eq!(tally.games(), 3);
    assert_eq!(tally.user, 0);
}

#[test]
fn test_reset_keeps_policy_and_allows_new_symbol() {
    let mut game = Game::new(Difficulty::Heuristic.controller(true));
    game.choose_symbol(Mark::X).unwrap();
    game.apply_human_move(Move::new(1, 1).unwrap()).unwrap();
    assert!(game.awaiting_computer());

    game.reset();
    assert_eq!(game.phase(), Phase::ChoosingSymbol);
    assert!(!game.awaiting_computer());

    game.choose_symbol(Mark::O).unwrap();
    assert_eq!(game.board().count(Mark::X), 1);
    assert_eq!(game.current_player(), Mark::O);
}

#[test]
fn test_selfplay_binary_reports_results() {
    let exe = env!("CARGO_BIN_EXE_selfplay");
    let output = Command::new(exe)
        .args(["6", "minimax", "minimax"])
        .output()
        .expect("failed to run selfplay");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Games: 6"));
    assert!(stdout.contains("Draws: 6 (100.0%)"));
}

#[test]
fn test_selfplay_binary_rejects_unknown_policy() {
    let exe = env!("CARGO_BIN_EXE_selfplay");
    let output = Command::new(exe)
        .args(["1", "nightmare", "minimax"])
        .output()
        .expect("failed to run selfplay");
    assert!(!output.status.success());
}
