//! Pet Clock - background aging.
//!
//! A tokio task ticks the shared [`Habitat`] at a fixed interval until the pet
//! passes out or the owner stops the clock.
//!
//! The run state lives inside the habitat lock, so a tick either runs to
//! completion before [`PetClock::stop`] takes the lock or observes the stop
//! and does nothing.

pub mod habitat;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::errors::Result;

pub use habitat::{ClockState, Expiry, Habitat, SharedHabitat, StopCause, TickOutcome};

/// Default time between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(7500);

/// Smallest interval a clock will run at.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to a running tick task.
pub struct PetClock {
    habitat: SharedHabitat,
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl PetClock {
    /// Start ticking `habitat` every `interval`. The first tick happens one
    /// full interval from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(habitat: SharedHabitat, interval: Duration) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let task = tokio::spawn(run_ticks(Arc::clone(&habitat), interval));
        debug!(?interval, "Pet clock started");

        Self {
            habitat,
            interval,
            task: Some(task),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> Result<ClockState> {
        Ok(self.habitat.lock()?.state())
    }

    /// Stop ticking. Once this returns no further tick will change the pet.
    ///
    /// Returns `true` if this call stopped a running clock, `false` if it was
    /// already stopped (by an earlier call or because the pet passed out).
    pub fn stop(&mut self) -> Result<bool> {
        let halted = self.habitat.lock()?.halt();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if halted {
            info!("Pet clock stopped");
        }
        Ok(halted)
    }
}

impl Drop for PetClock {
    fn drop(&mut self) {
        if let Ok(mut habitat) = self.habitat.lock() {
            habitat.halt();
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_ticks(habitat: SharedHabitat, interval: Duration) {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let outcome = match habitat.lock() {
            Ok(mut habitat) => habitat.tick(),
            Err(e) => {
                error!("Pet state lock poisoned, stopping clock: {e}");
                return;
            }
        };

        match outcome {
            TickOutcome::Alive(_) => {}
            TickOutcome::Expired(expiry) => {
                debug!("Clock finished: {expiry}");
                return;
            }
            TickOutcome::Stopped => return,
        }
    }
}
