//! Move legality.

use tracing::instrument;

use super::types::Piece;

/// Decides whether `piece` may step to `(target_row, target_col)`.
///
/// Checks, in order, and stops at the first failure:
/// 1. the target square is empty,
/// 2. the step shifts exactly one column,
/// 3. the step advances exactly one row toward the opponent.
///
/// The target is not bounds-checked; callers map input onto the board first.
#[instrument(level = "trace", skip(piece, all_pieces), fields(piece = %piece))]
pub fn is_valid_move(piece: &Piece, target_row: u8, target_col: u8, all_pieces: &[Piece]) -> bool {
    if all_pieces.iter().any(|p| p.is_at(target_row, target_col)) {
        return false;
    }

    let col_diff = (i16::from(target_col) - i16::from(piece.col)).abs();
    if col_diff != 1 {
        return false;
    }

    let row_diff = i16::from(target_row) - i16::from(piece.row);
    row_diff == piece.color.forward()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerColor;

    #[test]
    fn white_steps_up_diagonally() {
        let piece = Piece::new(5, 2, PlayerColor::White);
        assert!(is_valid_move(&piece, 4, 1, &[piece]));
        assert!(is_valid_move(&piece, 4, 3, &[piece]));
        assert!(!is_valid_move(&piece, 6, 1, &[piece]));
        assert!(!is_valid_move(&piece, 6, 3, &[piece]));
    }

    #[test]
    fn black_steps_down_diagonally() {
        let piece = Piece::new(2, 3, PlayerColor::Black);
        assert!(is_valid_move(&piece, 3, 2, &[piece]));
        assert!(is_valid_move(&piece, 3, 4, &[piece]));
        assert!(!is_valid_move(&piece, 1, 2, &[piece]));
        assert!(!is_valid_move(&piece, 1, 4, &[piece]));
    }

    #[test]
    fn straight_and_long_steps_fail() {
        let piece = Piece::new(5, 2, PlayerColor::White);
        assert!(!is_valid_move(&piece, 4, 2, &[piece]));
        assert!(!is_valid_move(&piece, 3, 4, &[piece]));
        assert!(!is_valid_move(&piece, 3, 0, &[piece]));
        assert!(!is_valid_move(&piece, 5, 3, &[piece]));
    }

    #[test]
    fn occupied_target_fails_even_by_own_piece() {
        let piece = Piece::new(5, 2, PlayerColor::White);
        let blocker = Piece::new(4, 1, PlayerColor::White);
        assert!(!is_valid_move(&piece, 4, 1, &[piece, blocker]));
    }

    #[test]
    fn tapping_own_square_fails() {
        let piece = Piece::new(5, 2, PlayerColor::White);
        assert!(!is_valid_move(&piece, 5, 2, &[piece]));
    }
}
