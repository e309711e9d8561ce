//! Tests for the move validator.

use dama_rules::{BOARD_SIZE, Board, Piece, PlayerColor, is_valid_move};

/// Every square a piece could be asked to move to.
fn all_squares() -> impl Iterator<Item = (u8, u8)> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
}

#[test]
fn test_occupied_target_is_never_valid() {
    let board = Board::initial();
    for piece in board.pieces() {
        for other in board.pieces() {
            assert!(
                !is_valid_move(piece, other.row, other.col, board.pieces()),
                "{piece} should not move onto {other}"
            );
        }
    }
}

#[test]
fn test_column_shift_must_be_exactly_one() {
    for color in [PlayerColor::White, PlayerColor::Black] {
        let piece = Piece::new(4, 3, color);
        for (row, col) in all_squares() {
            if col.abs_diff(piece.col) != 1 {
                assert!(
                    !is_valid_move(&piece, row, col, &[piece]),
                    "{piece} -> ({row}, {col}) shifts {} columns",
                    col.abs_diff(piece.col)
                );
            }
        }
    }
}

#[test]
fn test_white_moves_only_one_row_up() {
    let piece = Piece::new(4, 3, PlayerColor::White);
    let legal: Vec<_> = all_squares()
        .filter(|&(row, col)| is_valid_move(&piece, row, col, &[piece]))
        .collect();
    assert_eq!(legal, vec![(3, 2), (3, 4)]);
}

#[test]
fn test_black_moves_only_one_row_down() {
    let piece = Piece::new(4, 3, PlayerColor::Black);
    let legal: Vec<_> = all_squares()
        .filter(|&(row, col)| is_valid_move(&piece, row, col, &[piece]))
        .collect();
    assert_eq!(legal, vec![(5, 2), (5, 4)]);
}

#[test]
fn test_edge_piece_has_single_step() {
    let piece = Piece::new(5, 0, PlayerColor::White);
    let board = Board::initial();
    assert!(is_valid_move(&piece, 4, 1, board.pieces()));
    // two rows is a jump, which does not exist
    assert!(!is_valid_move(&piece, 3, 1, board.pieces()));
}

#[test]
fn test_opening_position_legal_steps() {
    let board = Board::initial();
    let white_moves = board
        .pieces()
        .iter()
        .filter(|p| p.color == PlayerColor::White)
        .flat_map(|p| all_squares().map(move |(r, c)| (*p, r, c)))
        .filter(|(p, r, c)| is_valid_move(p, *r, *c, board.pieces()))
        .count();
    // front row (5,0) (5,2) (5,4) (5,6): 1 + 2 + 2 + 2
    assert_eq!(white_moves, 7);
}

#[test]
fn test_validator_does_not_mutate_inputs() {
    let board = Board::initial();
    let before = board.clone();
    let piece = board.piece_at(5, 2).expect("opening piece");
    let _ = is_valid_move(&piece, 4, 3, board.pieces());
    assert_eq!(board, before);
}
