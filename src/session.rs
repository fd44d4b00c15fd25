//! Pet Session
//!
//! Owns the one pet of a game together with the clock aging it. This is the
//! surface the menu talks to: care actions, status, and the expiry notice.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::info;

use crate::clock::{ClockState, Expiry, Habitat, PetClock, SharedHabitat, TickOutcome, TICK_INTERVAL};
use crate::errors::Result;
use crate::pet::{PetState, Portion, StatusReport};

/// How a session's clock and random generators are set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub interval: Duration,
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            interval: TICK_INTERVAL,
            seed: None,
        }
    }
}

/// A running game with a single pet.
pub struct PetSession {
    habitat: SharedHabitat,
    clock: PetClock,
    expiry: Option<oneshot::Receiver<Expiry>>,
}

impl PetSession {
    /// Start a session with default options.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(pet: PetState) -> Self {
        Self::with_options(pet, SessionOptions::default())
    }

    pub fn with_options(pet: PetState, options: SessionOptions) -> Self {
        info!(
            name = %pet.name(),
            species = %pet.species(),
            hunger = pet.hunger(),
            boredom = pet.boredom(),
            "Starting pet session"
        );

        let (habitat, expiry) = Habitat::new(pet, options.seed);
        let habitat = habitat.shared();
        let clock = PetClock::start(Arc::clone(&habitat), options.interval);

        Self {
            habitat,
            clock,
            expiry: Some(expiry),
        }
    }

    /// Feed the pet; returns the new hunger.
    pub fn feed(&self, portion: Portion) -> Result<u64> {
        self.habitat.lock()?.feed(portion)
    }

    /// Play with the pet; returns the new boredom.
    pub fn play(&self, portion: Portion) -> Result<u64> {
        self.habitat.lock()?.play(portion)
    }

    pub fn status_report(&self) -> Result<StatusReport> {
        Ok(self.habitat.lock()?.status_report())
    }

    pub fn speak(&self) -> Result<&'static str> {
        Ok(self.habitat.lock()?.speak())
    }

    /// Copy of the pet as it is right now.
    pub fn snapshot(&self) -> Result<PetState> {
        Ok(self.habitat.lock()?.pet().clone())
    }

    pub fn clock_state(&self) -> Result<ClockState> {
        self.clock.state()
    }

    /// Run one tick right away, outside the schedule.
    pub fn tick_now(&self) -> Result<TickOutcome> {
        Ok(self.habitat.lock()?.tick())
    }

    /// Stop the clock without an expiry notice. Safe to call repeatedly.
    pub fn stop_clock(&mut self) -> Result<bool> {
        self.clock.stop()
    }

    /// Whether the expiry notice has not been consumed yet.
    pub fn is_watching(&self) -> bool {
        self.expiry.is_some()
    }

    /// Wait for the pet to pass out.
    ///
    /// Resolves with the notice once, or with `None` if the clock was stopped
    /// first. Later calls return `None` immediately. Cancel safe.
    pub async fn expired(&mut self) -> Option<Expiry> {
        let receiver = self.expiry.as_mut()?;
        let result = receiver.await.ok();
        self.expiry = None;
        result
    }
}
