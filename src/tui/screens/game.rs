//! Game screen: the board, the turn banner and the turn clock.

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use dama_rules::{PlayerColor, TapOutcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::styles::{BoardStyle, TeamStyle};
use crate::timer::format_elapsed;
use crate::tui::board::{BOARD_HEIGHT, BOARD_WIDTH, BoardWidget};
use crate::tui::input::{Square, move_cursor, square_at};
use crate::tui::screen::{AppContext, Screen, ScreenTransition};

/// Name shown for the Black side.
pub const OPPONENT_NAME: &str = "William Shakespeare";

/// State for the game screen.
#[derive(Debug)]
pub struct GameScreen {
    cursor: Square,
    message: String,
    /// Where the board was last drawn, for mouse hit-testing.
    board_area: Cell<Option<Rect>>,
}

impl GameScreen {
    /// Creates the screen with the cursor on White's front-left piece.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameScreen");
        Self {
            cursor: (5, 0),
            message: "Select one of your pieces.".to_string(),
            board_area: Cell::new(None),
        }
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Square {
        self.cursor
    }

    /// Feedback line from the last tap.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Area of the last drawn board, inside its border.
    pub fn board_area(&self) -> Option<Rect> {
        self.board_area.get()
    }

    #[instrument(skip(self, ctx))]
    fn tap(&mut self, square: Square, ctx: &mut AppContext) {
        let (row, col) = square;
        let outcome = ctx.session.tap(row, col);
        self.message = match outcome {
            TapOutcome::Selected(piece) => {
                format!("Selected piece at ({}, {}).", piece.row, piece.col)
            }
            TapOutcome::Moved { to, .. } => format!("Moved to ({}, {}).", to.row, to.col),
            TapOutcome::Deselected(_) => "That move is not allowed. Selection cleared.".to_string(),
            TapOutcome::Ignored => ignored_hint(ctx.session.state().current_player()),
        };
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn ignored_hint(player: PlayerColor) -> String {
    match player {
        PlayerColor::White => "Pick one of your pieces.".to_string(),
        PlayerColor::Black => format!("Pick one of {}'s pieces.", OPPONENT_NAME),
    }
}

fn turn_banner(player: PlayerColor) -> String {
    match player {
        PlayerColor::White => "Your turn".to_string(),
        PlayerColor::Black => format!("{}'s turn", OPPONENT_NAME),
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let theme = ctx.theme();
        let state = ctx.session.state();
        let area = frame.area();
        frame.render_widget(Block::default().style(theme.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Opponent
                Constraint::Min(BOARD_HEIGHT + 2),
                Constraint::Length(3), // Turn and clock
                Constraint::Length(1), // Last tap
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new("dama")
            .style(theme.title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let opponent = Paragraph::new(format!("Opponent: {}", OPPONENT_NAME))
            .style(theme.base())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(opponent, chunks[1]);

        let frame_area = center_rect(chunks[2], BOARD_WIDTH + 2, BOARD_HEIGHT + 2);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.muted_style());
        let inner = block.inner(frame_area);
        frame.render_widget(block, frame_area);
        self.board_area.set(Some(inner));

        let board_style = BoardStyle::resolve(ctx.settings.board_style());
        let team_style = TeamStyle::resolve(ctx.settings.piece_style());
        frame.render_widget(
            BoardWidget::new(state, Some(self.cursor), board_style, team_style),
            inner,
        );

        let status = Line::from(vec![
            Span::styled(turn_banner(state.current_player()), theme.base()),
            Span::raw("    "),
            Span::styled(
                format!("⏳ {}", format_elapsed(state.turn_elapsed_seconds())),
                theme.highlight_style(),
            ),
        ]);
        let status = Paragraph::new(status)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[3]);

        let message = Paragraph::new(self.message.as_str())
            .style(theme.base())
            .alignment(Alignment::Center);
        frame.render_widget(message, chunks[4]);

        let help = Paragraph::new(
            "←↑↓→: Move | Enter/Space/Click: Select or move | r: Restart | s: Settings | q: Quit",
        )
        .style(theme.muted_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut AppContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.tap(self.cursor, ctx);
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                ctx.session.restart();
                self.message = "New game. Select one of your pieces.".to_string();
                ScreenTransition::Stay
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                info!("Opening settings");
                ScreenTransition::GoToSettings
            }
            KeyCode::Char('?') => ScreenTransition::GoToHelp,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, mouse, ctx))]
    fn handle_mouse(&mut self, mouse: MouseEvent, ctx: &mut AppContext) -> ScreenTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenTransition::Stay;
        }
        let Some(board) = self.board_area.get() else {
            return ScreenTransition::Stay;
        };
        if let Some(square) = square_at(board, mouse.column, mouse.row) {
            self.cursor = square;
            self.tap(square, ctx);
        }
        ScreenTransition::Stay
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
