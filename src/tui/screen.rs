//! Screen trait and transition type for the app state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;

use super::theme::Theme;
use crate::session::GameSession;
use crate::settings::{Settings, SettingsStore};

/// Everything a screen may read or change.
#[derive(Debug)]
pub struct AppContext {
    /// The running game.
    pub session: GameSession,
    /// Settings handle for writes.
    pub store: SettingsStore,
    /// Latest settings observed from the store.
    pub settings: Settings,
}

impl AppContext {
    /// Interface theme for the current dark-mode flag.
    pub fn theme(&self) -> Theme {
        Theme::new(*self.settings.dark_mode())
    }
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`AppController`](super::AppController) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the board.
    GoToGame,
    /// Navigate to the settings screen.
    GoToSettings,
    /// Navigate to the piece and board style picker.
    GoToCustomization,
    /// Navigate to the rules summary.
    GoToHelp,
    /// Navigate to the credits.
    GoToCredits,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own view state, renders its UI, and handles input.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, ctx: &AppContext);

    /// Handles a key press and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut AppContext) -> ScreenTransition;

    /// Handles a mouse event. Most screens ignore the mouse.
    fn handle_mouse(&mut self, _mouse: MouseEvent, _ctx: &mut AppContext) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
