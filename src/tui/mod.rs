//! Terminal UI for dama.

mod board;
mod controller;
mod input;
mod screen;
mod screens;
mod theme;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument, warn};

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, BoardWidget, CELL_HEIGHT, CELL_WIDTH};
pub use controller::{AppController, ScreenKind};
pub use input::{Square, move_cursor, square_at};
pub use screen::{AppContext, Screen, ScreenTransition};
pub use screens::{
    CustomizationScreen, Focus, GameScreen, InfoPage, InfoScreen, OPPONENT_NAME, SettingsScreen,
};
pub use theme::Theme;

use crate::session::GameSession;
use crate::settings::SettingsStore;

/// Runs the interactive board until the user quits.
///
/// Takes over the terminal, restores it on exit, and waits for the last
/// settings write before returning.
#[instrument(skip(store))]
pub async fn run_tui(store: SettingsStore) -> Result<()> {
    info!("Starting dama TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = AppController::new(GameSession::start(), store.clone());
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = store.flush().await {
        warn!(error = %e, "Could not save settings on exit");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}
