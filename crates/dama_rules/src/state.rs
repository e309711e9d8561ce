//! Game snapshot and the tap-driven selection/move state machine.
//!
//! A [`GameState`] is never mutated in place. Every event produces a new
//! snapshot; the caller swaps it in and re-renders.

use serde::Serialize;
use tracing::{debug, instrument};

use super::board::Board;
use super::rules::is_valid_move;
use super::types::{Piece, PlayerColor};

/// Selection phase, derived from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected; a tap may select a piece of the player to move.
    NoSelection,
    /// A piece is selected; the next tap tries to move it.
    PieceSelected(Piece),
}

/// What a tap did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum TapOutcome {
    /// A piece of the player to move became selected.
    #[display("selected {_0}")]
    Selected(Piece),
    /// The selected piece moved; the turn passed to the opponent.
    #[display("moved {from} to ({}, {})", to.row, to.col)]
    Moved {
        /// Piece before the move.
        from: Piece,
        /// Piece after the move.
        to: Piece,
    },
    /// The tap was not a legal move for the selected piece; selection cleared.
    #[display("deselected {_0}")]
    Deselected(Piece),
    /// Nothing selectable was tapped.
    #[display("ignored")]
    Ignored,
}

/// Immutable snapshot of a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    selected: Option<Piece>,
    current_player: PlayerColor,
    turn_elapsed_seconds: u64,
    moves_played: u32,
}

impl GameState {
    /// Fresh game: opening layout, White to move, clock at zero.
    #[instrument]
    pub fn new() -> Self {
        Self::with_board(Board::initial(), PlayerColor::White)
    }

    /// Starts from an arbitrary layout.
    pub fn with_board(board: Board, current_player: PlayerColor) -> Self {
        Self {
            board,
            selected: None,
            current_player,
            turn_elapsed_seconds: 0,
            moves_played: 0,
        }
    }

    /// The piece set.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shorthand for the board's pieces.
    pub fn pieces(&self) -> &[Piece] {
        self.board.pieces()
    }

    /// Currently selected piece.
    pub fn selected(&self) -> Option<Piece> {
        self.selected
    }

    /// Side to move.
    pub fn current_player(&self) -> PlayerColor {
        self.current_player
    }

    /// Seconds since the current turn started.
    pub fn turn_elapsed_seconds(&self) -> u64 {
        self.turn_elapsed_seconds
    }

    /// Accepted moves so far. Also identifies the current turn.
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Selection phase of this snapshot.
    pub fn phase(&self) -> Phase {
        match self.selected {
            Some(piece) => Phase::PieceSelected(piece),
            None => Phase::NoSelection,
        }
    }

    /// Handles a tap on `(row, col)` and returns the next snapshot.
    ///
    /// Never fails: an unusable tap is either ignored or clears the selection.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn tap(&self, row: u8, col: u8) -> (GameState, TapOutcome) {
        let (next, outcome) = match self.phase() {
            Phase::NoSelection => self.try_select(row, col),
            Phase::PieceSelected(piece) => self.try_move(piece, row, col),
        };
        debug!(%outcome, "Tap handled");
        (next, outcome)
    }

    /// One second of the current turn has passed.
    pub fn tick(&self) -> GameState {
        Self {
            turn_elapsed_seconds: self.turn_elapsed_seconds.saturating_add(1),
            ..self.clone()
        }
    }

    fn try_select(&self, row: u8, col: u8) -> (GameState, TapOutcome) {
        match self.board.piece_at(row, col) {
            Some(piece) if piece.color == self.current_player => (
                Self {
                    selected: Some(piece),
                    ..self.clone()
                },
                TapOutcome::Selected(piece),
            ),
            _ => (self.clone(), TapOutcome::Ignored),
        }
    }

    fn try_move(&self, piece: Piece, row: u8, col: u8) -> (GameState, TapOutcome) {
        if !is_valid_move(&piece, row, col, self.board.pieces()) {
            return (
                Self {
                    selected: None,
                    ..self.clone()
                },
                TapOutcome::Deselected(piece),
            );
        }

        let next = Self {
            board: self.board.relocate(piece, row, col),
            selected: None,
            current_player: self.current_player.opponent(),
            turn_elapsed_seconds: 0,
            moves_played: self.moves_played + 1,
        };
        (
            next,
            TapOutcome::Moved {
                from: piece,
                to: piece.moved_to(row, col),
            },
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
