//! Checkers rules: pieces, the board, move legality and the tap state machine.
//!
//! Pure and synchronous. The application crate owns the clock and the UI and
//! drives a [`GameState`] through [`GameState::tap`] and [`GameState::tick`].
//!
//! # Example
//!
//! ```
//! use dama_rules::{GameState, PlayerColor, TapOutcome};
//!
//! let game = GameState::new();
//! let (game, _) = game.tap(5, 0);
//! let (game, outcome) = game.tap(4, 1);
//!
//! assert!(matches!(outcome, TapOutcome::Moved { .. }));
//! assert_eq!(game.current_player(), PlayerColor::Black);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod rules;
mod state;
mod types;

pub use board::{Board, BoardError};
pub use rules::is_valid_move;
pub use state::{GameState, Phase, TapOutcome};
pub use types::{BOARD_SIZE, Piece, PlayerColor, is_dark_square};
