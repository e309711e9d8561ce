//! Keyboard cursor movement and mouse-to-square mapping.

use crossterm::event::KeyCode;
use dama_rules::BOARD_SIZE;
use ratatui::layout::Rect;

use super::board::{CELL_HEIGHT, CELL_WIDTH};

/// Board square as `(row, col)`.
pub type Square = (u8, u8);

const LAST: u8 = BOARD_SIZE - 1;

/// Moves the cursor one square with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Square, key: KeyCode) -> Square {
    let (row, col) = cursor;
    match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(LAST), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(LAST)),
        _ => cursor,
    }
}

/// Maps a terminal cell to a board square.
///
/// `board` is the area the board was drawn in. Clicks outside it are not
/// taps; clicks inside are clamped onto the 8x8 grid.
pub fn square_at(board: Rect, column: u16, row: u16) -> Option<Square> {
    if column < board.x
        || row < board.y
        || column >= board.x + board.width
        || row >= board.y + board.height
    {
        return None;
    }

    let clamp = |v: u16| u8::try_from(v).unwrap_or(LAST).min(LAST);
    Some((
        clamp((row - board.y) / CELL_HEIGHT),
        clamp((column - board.x) / CELL_WIDTH),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stops_at_edges() {
        assert_eq!(move_cursor((0, 0), KeyCode::Up), (0, 0));
        assert_eq!(move_cursor((0, 0), KeyCode::Left), (0, 0));
        assert_eq!(move_cursor((7, 7), KeyCode::Down), (7, 7));
        assert_eq!(move_cursor((7, 7), KeyCode::Right), (7, 7));
        assert_eq!(move_cursor((5, 0), KeyCode::Up), (4, 0));
        assert_eq!(move_cursor((5, 0), KeyCode::Char('x')), (5, 0));
    }

    #[test]
    fn clicks_map_to_squares() {
        let board = Rect::new(10, 4, 8 * CELL_WIDTH, 8 * CELL_HEIGHT);
        assert_eq!(square_at(board, 10, 4), Some((0, 0)));
        assert_eq!(
            square_at(board, 10 + CELL_WIDTH, 4 + 5 * CELL_HEIGHT),
            Some((5, 1))
        );
        assert_eq!(square_at(board, 9, 4), None);
        assert_eq!(square_at(board, 10, 4 + 8 * CELL_HEIGHT), None);
    }

    #[test]
    fn oversized_area_clamps_into_range() {
        let board = Rect::new(0, 0, 100, 100);
        assert_eq!(square_at(board, 99, 99), Some((7, 7)));
    }
}
