//! Static text screens: help and credits.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::instrument;

use crate::tui::screen::{AppContext, Screen, ScreenTransition};

const HELP_TEXT: &str = "\
You play White and move first.

Select one of your pieces, then choose an empty dark square one step \
diagonally forward. White moves up the board, Black moves down.

Pieces never move backward and never jump. Choosing any other square \
clears the selection.

The clock shows how long the current turn has lasted and restarts \
after every move.";

const CREDITS_TEXT: &str = "\
dama

A checkers board for the terminal.

Built with ratatui, crossterm and tokio.";

/// Which text to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPage {
    /// Rules summary.
    Help,
    /// Credits.
    Credits,
}

/// Read-only text page; any key returns to settings.
#[derive(Debug)]
pub struct InfoScreen {
    page: InfoPage,
}

impl InfoScreen {
    /// Creates a page.
    pub fn new(page: InfoPage) -> Self {
        Self { page }
    }

    /// The page shown.
    pub fn page(&self) -> InfoPage {
        self.page
    }
}

impl Screen for InfoScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let theme = ctx.theme();
        let area = frame.area();
        frame.render_widget(Block::default().style(theme.base()), area);

        let (title, body) = match self.page {
            InfoPage::Help => ("Help", HELP_TEXT),
            InfoPage::Credits => ("Credits", CREDITS_TEXT),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let header = Paragraph::new(title)
            .style(theme.title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let text = Paragraph::new(body)
            .style(theme.base())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(text, chunks[1]);

        let help = Paragraph::new("Any key: Back | q: Quit")
            .style(theme.muted_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut AppContext) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::GoToSettings,
        }
    }
}
