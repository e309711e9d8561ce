//! Game session: owns the current snapshot and the turn timer.

use dama_rules::{GameState, TapOutcome};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, instrument, trace};

use crate::timer::{TurnTick, TurnTimer};

/// State machine object for one game.
///
/// Holds a single immutable [`GameState`] and replaces it on every tap or
/// tick. Taps and ticks are applied by whoever owns the session, one at a
/// time. A fresh [`TurnTimer`] is started every time the turn changes; ticks
/// from an earlier timer are recognised by their key and dropped.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    timer: TurnTimer,
    next_turn_key: u64,
    tick_tx: UnboundedSender<TurnTick>,
    tick_rx: UnboundedReceiver<TurnTick>,
}

impl GameSession {
    /// Starts a new game at the opening layout. Requires a tokio runtime.
    #[instrument]
    pub fn start() -> Self {
        Self::with_state(GameState::new())
    }

    /// Starts a session from an existing snapshot.
    #[instrument(skip(state))]
    pub fn with_state(state: GameState) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let timer = TurnTimer::start(0, tick_tx.clone());
        info!(player = %state.current_player(), "Game session started");
        Self {
            state,
            timer,
            next_turn_key: 1,
            tick_tx,
            tick_rx,
        }
    }

    /// Latest snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a tap on `(row, col)`.
    #[instrument(skip(self))]
    pub fn tap(&mut self, row: u8, col: u8) -> TapOutcome {
        let (next, outcome) = self.state.tap(row, col);
        self.state = next;

        if matches!(outcome, TapOutcome::Moved { .. }) {
            info!(
                %outcome,
                player = %self.state.current_player(),
                moves = self.state.moves_played(),
                "Move accepted"
            );
            self.restart_timer();
        }
        outcome
    }

    /// Throws away the current game and starts from the opening layout.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = GameState::new();
        self.restart_timer();
    }

    /// Applies every tick already delivered. Returns how many counted.
    pub fn drain_ticks(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(tick) = self.tick_rx.try_recv() {
            if self.apply_tick(tick) {
                applied += 1;
            }
        }
        applied
    }

    /// Waits for the next tick of the current turn and applies it.
    pub async fn next_tick(&mut self) {
        while let Some(tick) = self.tick_rx.recv().await {
            if self.apply_tick(tick) {
                return;
            }
        }
    }

    fn apply_tick(&mut self, tick: TurnTick) -> bool {
        if tick.turn != self.timer.turn() {
            trace!(stale = tick.turn, current = self.timer.turn(), "Dropping stale tick");
            return false;
        }
        self.state = self.state.tick();
        true
    }

    fn restart_timer(&mut self) {
        let key = self.next_turn_key;
        self.next_turn_key += 1;
        debug!(turn = key, "Resetting turn timer");
        // assigning drops, and so aborts, the previous timer
        self.timer = TurnTimer::start(key, self.tick_tx.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dama_rules::PlayerColor;

    #[tokio::test(start_paused = true)]
    async fn deselect_keeps_timer_running() {
        let mut session = GameSession::start();
        session.next_tick().await;

        session.tap(5, 0);
        session.tap(3, 1);
        session.next_tick().await;

        assert_eq!(session.state().turn_elapsed_seconds(), 2);
        assert_eq!(session.state().current_player(), PlayerColor::White);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticks_are_dropped() {
        let mut session = GameSession::start();
        // a tick from a timer that no longer exists
        session.tick_tx.send(TurnTick::new(0)).unwrap();
        session.restart();

        assert_eq!(session.drain_ticks(), 0);
        assert_eq!(session.state().turn_elapsed_seconds(), 0);
    }
}
