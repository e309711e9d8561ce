//! Tests for the tap-driven selection and turn state machine.

use dama_rules::{Board, GameState, Phase, Piece, PlayerColor, TapOutcome};

fn white(row: u8, col: u8) -> Piece {
    Piece::new(row, col, PlayerColor::White)
}

fn black(row: u8, col: u8) -> Piece {
    Piece::new(row, col, PlayerColor::Black)
}

#[test]
fn test_select_then_step_forward_is_accepted() {
    let game = GameState::new().tick().tick().tick();

    let (game, outcome) = game.tap(5, 0);
    assert_eq!(outcome, TapOutcome::Selected(white(5, 0)));
    assert_eq!(game.phase(), Phase::PieceSelected(white(5, 0)));

    let (game, outcome) = game.tap(4, 1);
    assert_eq!(
        outcome,
        TapOutcome::Moved {
            from: white(5, 0),
            to: white(4, 1)
        }
    );
    assert_eq!(game.board().piece_at(4, 1), Some(white(4, 1)));
    assert_eq!(game.board().piece_at(5, 0), None);
    assert_eq!(game.current_player(), PlayerColor::Black);
    assert_eq!(game.turn_elapsed_seconds(), 0);
    assert_eq!(game.phase(), Phase::NoSelection);
    assert_eq!(game.moves_played(), 1);
}

#[test]
fn test_two_row_step_is_rejected_and_deselects() {
    let start = GameState::new();
    let (selected, _) = start.tap(5, 0);
    let selected = selected.tick();

    let (game, outcome) = selected.tap(3, 1);

    assert_eq!(outcome, TapOutcome::Deselected(white(5, 0)));
    assert_eq!(game.phase(), Phase::NoSelection);
    assert_eq!(game.board(), start.board());
    assert_eq!(game.current_player(), PlayerColor::White);
    assert_eq!(game.turn_elapsed_seconds(), 1);
}

#[test]
fn test_opponent_piece_cannot_be_selected() {
    let start = GameState::new();
    let (game, outcome) = start.tap(2, 1);
    assert_eq!(outcome, TapOutcome::Ignored);
    assert_eq!(game, start);

    // the follow-up tap is also a plain no-selection tap
    let (game, outcome) = game.tap(1, 0);
    assert_eq!(outcome, TapOutcome::Ignored);
    assert_eq!(game, start);
}

#[test]
fn test_empty_square_tap_changes_nothing() {
    let start = GameState::new();
    let (game, outcome) = start.tap(4, 3);
    assert_eq!(outcome, TapOutcome::Ignored);
    assert_eq!(game, start);
}

#[test]
fn test_deselection_is_idempotent() {
    let start = GameState::new();
    let (selected, _) = start.tap(5, 2);
    let (once, _) = selected.tap(5, 2);
    let (twice, outcome) = once.tap(5, 3);

    assert_eq!(once, start);
    assert_eq!(outcome, TapOutcome::Ignored);
    assert_eq!(twice, start);
}

#[test]
fn test_turns_alternate() {
    let game = GameState::new();
    let (game, _) = game.tap(5, 0);
    let (game, _) = game.tap(4, 1);
    assert_eq!(game.current_player(), PlayerColor::Black);

    // White cannot move out of turn
    let (game, outcome) = game.tap(5, 2);
    assert_eq!(outcome, TapOutcome::Ignored);

    let (game, _) = game.tap(2, 1);
    let (game, outcome) = game.tap(3, 2);
    assert!(matches!(outcome, TapOutcome::Moved { .. }));
    assert_eq!(game.current_player(), PlayerColor::White);
    assert_eq!(game.moves_played(), 2);
}

#[test]
fn test_black_moves_down_on_custom_board() {
    let board = Board::from_pieces(vec![black(2, 1), white(5, 4)]).expect("valid board");
    let game = GameState::with_board(board, PlayerColor::Black);

    let (game, _) = game.tap(2, 1);
    let (backwards, outcome) = game.tap(1, 0);
    assert_eq!(outcome, TapOutcome::Deselected(black(2, 1)));
    assert_eq!(backwards.current_player(), PlayerColor::Black);

    let (game, _) = backwards.tap(2, 1);
    let (game, outcome) = game.tap(3, 0);
    assert!(matches!(outcome, TapOutcome::Moved { .. }));
    assert_eq!(game.pieces(), &[black(3, 0), white(5, 4)]);
}

#[test]
fn test_no_two_pieces_share_a_square_after_play() {
    let mut game = GameState::new();
    let taps = [(5, 0), (4, 1), (2, 1), (3, 0), (4, 1), (3, 2), (2, 3), (3, 4)];
    for (row, col) in taps {
        game = game.tap(row, col).0;
    }
    let pieces = game.pieces();
    for (i, a) in pieces.iter().enumerate() {
        for b in &pieces[i + 1..] {
            assert!(!(a.row == b.row && a.col == b.col), "{a} and {b} collide");
        }
    }
    assert_eq!(pieces.len(), 24);
}

#[test]
fn test_snapshot_serializes() {
    let (game, _) = GameState::new().tap(5, 0);
    let json = serde_json::to_value(&game).expect("serializable");
    assert_eq!(json["current_player"], "White");
    assert_eq!(json["selected"]["row"], 5);
    assert_eq!(json["board"]["pieces"].as_array().map(Vec::len), Some(24));
}
