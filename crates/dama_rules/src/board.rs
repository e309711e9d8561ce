//! The piece set and its starting layout.

use serde::Serialize;
use tracing::instrument;

use super::types::{BOARD_SIZE, Piece, PlayerColor, is_dark_square};

/// Rows filled with Black pieces at the start.
const BLACK_HOME_ROWS: std::ops::Range<u8> = 0..3;
/// Rows filled with White pieces at the start.
const WHITE_HOME_ROWS: std::ops::Range<u8> = 5..8;

/// Error building a board from an arbitrary list of pieces.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Two pieces share a square.
    #[display("Square ({row}, {col}) holds more than one piece")]
    SquareOccupied {
        /// Row of the contested square.
        row: u8,
        /// Column of the contested square.
        col: u8,
    },
    /// A piece lies outside the 8x8 grid.
    #[display("Square ({row}, {col}) is off the board")]
    OffBoard {
        /// Offending row.
        row: u8,
        /// Offending column.
        col: u8,
    },
}

/// Ordered collection of pieces, at most one per square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    /// Standard 24-piece opening: 12 per side on the dark squares of the
    /// three home rows.
    #[instrument]
    pub fn initial() -> Self {
        let home = |rows: std::ops::Range<u8>, color: PlayerColor| {
            rows.flat_map(move |row| {
                (0..BOARD_SIZE)
                    .filter(move |&col| is_dark_square(row, col))
                    .map(move |col| Piece::new(row, col, color))
            })
        };

        let pieces = home(BLACK_HOME_ROWS, PlayerColor::Black)
            .chain(home(WHITE_HOME_ROWS, PlayerColor::White))
            .collect();
        Self { pieces }
    }

    /// Board without any pieces.
    pub fn empty() -> Self {
        Self { pieces: Vec::new() }
    }

    /// Builds a board from pieces, rejecting shared or off-board squares.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OffBoard`] for a coordinate outside `0..8` and
    /// [`BoardError::SquareOccupied`] when two pieces share a square.
    #[instrument(skip(pieces), fields(count = pieces.len()))]
    pub fn from_pieces(pieces: Vec<Piece>) -> Result<Self, BoardError> {
        for (idx, piece) in pieces.iter().enumerate() {
            if piece.row >= BOARD_SIZE || piece.col >= BOARD_SIZE {
                return Err(BoardError::OffBoard {
                    row: piece.row,
                    col: piece.col,
                });
            }
            if pieces[..idx].iter().any(|p| p.is_at(piece.row, piece.col)) {
                return Err(BoardError::SquareOccupied {
                    row: piece.row,
                    col: piece.col,
                });
            }
        }
        Ok(Self { pieces })
    }

    /// All pieces in board order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The piece standing on `(row, col)`, if any.
    pub fn piece_at(&self, row: u8, col: u8) -> Option<Piece> {
        self.pieces.iter().copied().find(|p| p.is_at(row, col))
    }

    /// Checks whether `(row, col)` holds a piece.
    pub fn is_occupied(&self, row: u8, col: u8) -> bool {
        self.piece_at(row, col).is_some()
    }

    /// Number of pieces owned by `color`.
    pub fn count(&self, color: PlayerColor) -> usize {
        self.pieces.iter().filter(|p| p.color == color).count()
    }

    /// Returns a new board where `piece` stands on `(row, col)` instead.
    ///
    /// Unchecked: callers validate the move first.
    pub(crate) fn relocate(&self, piece: Piece, row: u8, col: u8) -> Self {
        let pieces = self
            .pieces
            .iter()
            .map(|&p| if p == piece { p.moved_to(row, col) } else { p })
            .collect();
        Self { pieces }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
