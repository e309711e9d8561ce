//! dama - a checkers board for the terminal.
//!
//! The move rules and game snapshots live in [`dama_rules`]; this crate adds
//! the running pieces around them.
//!
//! # Architecture
//!
//! - **Session**: owns the current [`GameState`] and the per-turn clock
//! - **Timer**: one tokio task per turn, ticking once a second
//! - **Settings**: observable, file-backed preferences
//! - **TUI**: ratatui screens for the board, settings and style picker
//!
//! # Example
//!
//! ```no_run
//! use dama::{SettingsStore, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = SettingsStore::load("dama_settings.toml")?;
//! run_tui(store).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod session;
mod settings;
mod styles;
mod timer;
pub mod tui;

pub use session::GameSession;
pub use settings::{
    DEFAULT_BOARD_STYLE, DEFAULT_PIECE_STYLE, Settings, SettingsError, SettingsStore,
};
pub use styles::{
    BOARD_STYLES, BoardStyle, TEAM_STYLES, TeamStyle, board_style_ids, team_style_ids,
};
pub use timer::{TICK_PERIOD, TurnTick, TurnTimer, format_elapsed};
pub use tui::run_tui;

pub use dama_rules::{
    BOARD_SIZE, Board, BoardError, GameState, Phase, Piece, PlayerColor, TapOutcome,
    is_dark_square, is_valid_move,
};
