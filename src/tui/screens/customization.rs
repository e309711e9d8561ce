//! Customization screen: pick the piece (team) style and the board style.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::styles::{BOARD_STYLES, TEAM_STYLES};
use crate::tui::screen::{AppContext, Screen, ScreenTransition};

/// Which list receives the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Piece styles.
    Pieces,
    /// Board styles.
    Board,
}

/// State for the customization screen.
#[derive(Debug)]
pub struct CustomizationScreen {
    focus: Focus,
    pieces: ListState,
    boards: ListState,
}

impl CustomizationScreen {
    /// Creates the screen with both lists on the styles currently in use.
    #[instrument(skip(ctx))]
    pub fn new(ctx: &AppContext) -> Self {
        debug!("Initializing CustomizationScreen");
        let piece_idx = TEAM_STYLES
            .iter()
            .position(|s| s.id == ctx.settings.piece_style().as_str())
            .unwrap_or(0);
        let board_idx = BOARD_STYLES
            .iter()
            .position(|s| s.id == ctx.settings.board_style().as_str())
            .unwrap_or(0);

        let mut pieces = ListState::default();
        pieces.select(Some(piece_idx));
        let mut boards = ListState::default();
        boards.select(Some(board_idx));

        Self {
            focus: Focus::Pieces,
            pieces,
            boards,
        }
    }

    /// List with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    fn focused(&mut self) -> (&mut ListState, usize) {
        match self.focus {
            Focus::Pieces => (&mut self.pieces, TEAM_STYLES.len()),
            Focus::Board => (&mut self.boards, BOARD_STYLES.len()),
        }
    }

    fn step(&mut self, forward: bool) {
        let (state, count) = self.focused();
        let i = match state.selected() {
            Some(i) if forward => (i + 1) % count,
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }

    #[instrument(skip(self, ctx))]
    fn apply(&self, ctx: &mut AppContext) {
        match self.focus {
            Focus::Pieces => {
                let style = &TEAM_STYLES[self.pieces.selected().unwrap_or(0)];
                info!(style_id = style.id, "Piece style chosen");
                ctx.store.set_piece_style(style.id);
            }
            Focus::Board => {
                let style = &BOARD_STYLES[self.boards.selected().unwrap_or(0)];
                info!(style_id = style.id, "Board style chosen");
                ctx.store.set_board_style(style.id);
            }
        }
    }
}

fn marker(active: bool) -> &'static str {
    if active { "  (in use)" } else { "" }
}

impl Screen for CustomizationScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let theme = ctx.theme();
        let area = frame.area();
        frame.render_widget(Block::default().style(theme.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let title = Paragraph::new("Customize")
            .style(theme.title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let piece_items: Vec<ListItem> = TEAM_STYLES
            .iter()
            .map(|style| {
                let mut spans: Vec<Span> = style
                    .stripes
                    .iter()
                    .map(|&c| Span::styled("█", Style::default().fg(c)))
                    .collect();
                spans.push(Span::raw(format!(
                    " {}{}",
                    style.nation_name,
                    marker(style.id == ctx.settings.piece_style().as_str())
                )));
                ListItem::new(Line::from(spans))
            })
            .collect();

        let board_items: Vec<ListItem> = BOARD_STYLES
            .iter()
            .map(|style| {
                ListItem::new(Line::from(vec![
                    Span::styled("██", Style::default().fg(style.light)),
                    Span::styled("██", Style::default().fg(style.dark)),
                    Span::raw(format!(
                        " {}{}",
                        style.name,
                        marker(style.id == ctx.settings.board_style().as_str())
                    )),
                ]))
            })
            .collect();

        let list_block = |title: &'static str, focused: bool| {
            let border = if focused {
                theme.highlight_style()
            } else {
                theme.muted_style()
            };
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border)
        };

        let pieces = List::new(piece_items)
            .style(theme.base())
            .block(list_block("Your pieces", self.focus == Focus::Pieces))
            .highlight_style(theme.highlight_style())
            .highlight_symbol("> ");
        let mut piece_state = self.pieces.clone();
        frame.render_stateful_widget(pieces, columns[0], &mut piece_state);

        let boards = List::new(board_items)
            .style(theme.base())
            .block(list_block("Board", self.focus == Focus::Board))
            .highlight_style(theme.highlight_style())
            .highlight_symbol("> ");
        let mut board_state = self.boards.clone();
        frame.render_stateful_widget(boards, columns[1], &mut board_state);

        let help = Paragraph::new("↑↓: Navigate | Tab: Switch list | Enter: Use style | Esc: Back")
            .style(theme.muted_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut AppContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.step(false);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.step(true);
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = match self.focus {
                    Focus::Pieces => Focus::Board,
                    Focus::Board => Focus::Pieces,
                };
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(ctx);
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                ScreenTransition::GoToSettings
            }
            _ => ScreenTransition::Stay,
        }
    }
}
