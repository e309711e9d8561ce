//! Settings screen: dark mode and links to the other menus.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::tui::screen::{AppContext, Screen, ScreenTransition};

/// Entries of the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
enum SettingsOption {
    DarkMode,
    Customize,
    Help,
    Credits,
    Back,
}

impl SettingsOption {
    fn label(self, dark_mode: bool) -> String {
        match self {
            Self::DarkMode => format!("Dark mode          [ {} ]", if dark_mode { "On" } else { "Off" }),
            Self::Customize => "Customize pieces and board".to_string(),
            Self::Help => "Help".to_string(),
            Self::Credits => "Credits".to_string(),
            Self::Back => "Back to game".to_string(),
        }
    }
}

/// State for the settings screen.
#[derive(Debug)]
pub struct SettingsScreen {
    list_state: ListState,
}

impl SettingsScreen {
    /// Creates the settings screen with the first entry highlighted.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SettingsScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    fn select_previous(&mut self) {
        let count = SettingsOption::iter().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = SettingsOption::iter().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> SettingsOption {
        let idx = self.list_state.selected().unwrap_or(0);
        SettingsOption::iter()
            .nth(idx)
            .unwrap_or(SettingsOption::Back)
    }

    #[instrument(skip(self, ctx))]
    fn toggle_dark_mode(&self, ctx: &mut AppContext) {
        let enabled = !*ctx.settings.dark_mode();
        ctx.store.set_dark_mode(enabled);
        info!(dark_mode = enabled, "Toggled dark mode");
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SettingsScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let theme = ctx.theme();
        let area = frame.area();
        frame.render_widget(Block::default().style(theme.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Settings")
            .style(theme.title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let dark_mode = *ctx.settings.dark_mode();
        let items: Vec<ListItem> = SettingsOption::iter()
            .map(|opt| ListItem::new(opt.label(dark_mode)))
            .collect();

        let list = List::new(items)
            .style(theme.base())
            .block(Block::default().borders(Borders::ALL).title("Preferences"))
            .highlight_style(theme.highlight_style())
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter/←→: Select or toggle | Esc: Back")
            .style(theme.muted_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut AppContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Left | KeyCode::Right if self.selected_option() == SettingsOption::DarkMode => {
                self.toggle_dark_mode(ctx);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected_option() {
                SettingsOption::DarkMode => {
                    self.toggle_dark_mode(ctx);
                    ScreenTransition::Stay
                }
                SettingsOption::Customize => ScreenTransition::GoToCustomization,
                SettingsOption::Help => ScreenTransition::GoToHelp,
                SettingsOption::Credits => ScreenTransition::GoToCredits,
                SettingsOption::Back => ScreenTransition::GoToGame,
            },
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Leaving settings screen");
                ScreenTransition::GoToGame
            }
            _ => ScreenTransition::Stay,
        }
    }
}
