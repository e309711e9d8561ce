//! Board widget: squares in the board style, pieces in the team style.

use dama_rules::{BOARD_SIZE, GameState, PlayerColor, is_dark_square};
use derive_new::new;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::input::Square;
use crate::styles::{BoardStyle, TeamStyle};

/// Terminal columns per board square.
pub const CELL_WIDTH: u16 = 5;
/// Terminal rows per board square.
pub const CELL_HEIGHT: u16 = 1;
/// Width of the drawn board.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * BOARD_SIZE as u16;
/// Height of the drawn board.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * BOARD_SIZE as u16;

const PIECE_GLYPH: &str = "█";
const BLACK_PIECE: Color = Color::Rgb(0x22, 0x22, 0x22);
const SELECTED_SQUARE: Color = Color::Rgb(0xF5, 0xE0, 0x4C);
const CURSOR: Color = Color::Rgb(0xD0, 0x20, 0x20);

/// Renders one game snapshot.
#[derive(Debug, new)]
pub struct BoardWidget<'a> {
    state: &'a GameState,
    cursor: Option<Square>,
    board_style: &'a BoardStyle,
    team_style: &'a TeamStyle,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = self.state.selected();

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let x = area.x + u16::from(col) * CELL_WIDTH;
                let y = area.y + u16::from(row) * CELL_HEIGHT;
                if x + CELL_WIDTH > area.x + area.width || y + CELL_HEIGHT > area.y + area.height {
                    continue;
                }

                let mut bg = if is_dark_square(row, col) {
                    self.board_style.dark
                } else {
                    self.board_style.light
                };
                if selected.is_some_and(|p| p.is_at(row, col)) {
                    bg = SELECTED_SQUARE;
                }
                let square = Style::default().bg(bg);
                buf.set_string(x, y, " ".repeat(CELL_WIDTH as usize), square);

                if let Some(piece) = self.state.board().piece_at(row, col) {
                    let colors = match piece.color {
                        PlayerColor::White => self.team_style.stripes,
                        PlayerColor::Black => [BLACK_PIECE; 3],
                    };
                    for (i, color) in colors.into_iter().enumerate() {
                        buf.set_string(x + 1 + i as u16, y, PIECE_GLYPH, square.fg(color));
                    }
                }

                if self.cursor == Some((row, col)) {
                    let marker = square.fg(CURSOR).add_modifier(Modifier::BOLD);
                    buf.set_string(x, y, "[", marker);
                    buf.set_string(x + CELL_WIDTH - 1, y, "]", marker);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::{BOARD_STYLES, TEAM_STYLES};

    fn render(state: &GameState, cursor: Option<Square>) -> Buffer {
        let area = Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(state, cursor, &BOARD_STYLES[0], &TEAM_STYLES[1]).render(area, &mut buf);
        buf
    }

    #[test]
    fn squares_use_board_colors() {
        let buf = render(&GameState::new(), None);
        // (4, 0) is an empty light square, (4, 1) an empty dark one
        assert_eq!(buf[(0, 4)].bg, BOARD_STYLES[0].light);
        assert_eq!(buf[(CELL_WIDTH, 4)].bg, BOARD_STYLES[0].dark);
    }

    #[test]
    fn white_pieces_wear_team_stripes() {
        let buf = render(&GameState::new(), None);
        // white piece at (5, 0)
        let stripes = TEAM_STYLES[1].stripes;
        assert_eq!(buf[(1, 5)].symbol(), PIECE_GLYPH);
        assert_eq!(buf[(1, 5)].fg, stripes[0]);
        assert_eq!(buf[(3, 5)].fg, stripes[2]);
        // black piece at (0, 1)
        assert_eq!(buf[(CELL_WIDTH + 2, 0)].fg, BLACK_PIECE);
    }

    #[test]
    fn selection_and_cursor_are_marked() {
        let (state, _) = GameState::new().tap(5, 0);
        let buf = render(&state, Some((4, 1)));
        assert_eq!(buf[(0, 5)].bg, SELECTED_SQUARE);
        assert_eq!(buf[(CELL_WIDTH, 4)].symbol(), "[");
        assert_eq!(buf[(2 * CELL_WIDTH - 1, 4)].symbol(), "]");
    }
}
