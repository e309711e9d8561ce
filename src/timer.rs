//! Per-turn one-second ticker.

use derive_new::new;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, interval_at};
use tracing::{debug, instrument, trace};

/// Period between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One second elapsed in the turn identified by `turn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct TurnTick {
    /// Key of the turn the tick belongs to.
    pub turn: u64,
}

/// Repeating task sending a [`TurnTick`] every second for a single turn.
///
/// Aborted on drop, so replacing the timer cancels the previous turn's ticks.
#[derive(Debug)]
pub struct TurnTimer {
    turn: u64,
    handle: JoinHandle<()>,
}

impl TurnTimer {
    /// Starts ticking for `turn`. Must be called inside a tokio runtime.
    #[instrument(skip(ticks))]
    pub fn start(turn: u64, ticks: UnboundedSender<TurnTick>) -> Self {
        debug!("Starting turn timer");
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                interval.tick().await;
                trace!(turn, "Turn tick");
                if ticks.send(TurnTick::new(turn)).is_err() {
                    debug!(turn, "Tick receiver gone, stopping timer");
                    break;
                }
            }
        });
        Self { turn, handle }
    }

    /// Key of the turn this timer counts.
    pub fn turn(&self) -> u64 {
        self.turn
    }
}

/// Formats seconds as `MM:SS`. Minutes keep counting past 99.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

impl Drop for TurnTimer {
    fn drop(&mut self) {
        trace!(turn = self.turn, "Cancelling turn timer");
        self.handle.abort();
    }
}
