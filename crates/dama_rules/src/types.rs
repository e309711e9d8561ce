//! Core domain types for checkers.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Side owning a piece.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum PlayerColor {
    /// White (moves first, advances toward row 0).
    #[display("White")]
    White,
    /// Black (advances toward row 7).
    #[display("Black")]
    Black,
}

impl PlayerColor {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }

    /// Row delta of a single forward step for this side.
    pub fn forward(self) -> i16 {
        match self {
            PlayerColor::White => -1,
            PlayerColor::Black => 1,
        }
    }
}

/// A piece on the board.
///
/// Pieces are plain values: two pieces with the same coordinate and color are
/// the same piece. Moving a piece produces a new value via [`Piece::moved_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{color} ({row}, {col})")]
pub struct Piece {
    /// Row index, 0 at the top (Black's back row).
    pub row: u8,
    /// Column index, 0 on the left.
    pub col: u8,
    /// Owning side.
    pub color: PlayerColor,
}

impl Piece {
    /// Creates a new piece.
    pub fn new(row: u8, col: u8, color: PlayerColor) -> Self {
        Self { row, col, color }
    }

    /// Returns a copy of this piece relocated to `(row, col)`.
    pub fn moved_to(self, row: u8, col: u8) -> Self {
        Self { row, col, ..self }
    }

    /// True if the piece sits at `(row, col)`.
    pub fn is_at(&self, row: u8, col: u8) -> bool {
        self.row == row && self.col == col
    }
}

/// True for the dark squares pieces stand on.
pub fn is_dark_square(row: u8, col: u8) -> bool {
    (row + col) % 2 == 1
}
