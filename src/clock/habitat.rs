//! Shared pet state guarded by a single lock.
//!
//! The pet, the clock's run state, both random generators and the expiry
//! sender live together so that one lock acquisition covers a whole tick or a
//! whole care action.

use std::fmt;
use std::ops::Range;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::errors::{PetError, Result};
use crate::pet::{Mood, PetState, Portion, Species, StatusReport};

/// Range each counter grows by on every tick.
pub const TICK_INCREMENT: Range<u64> = 0..5;

/// Handle shared between the clock task and the session.
pub type SharedHabitat = Arc<Mutex<Habitat>>;

/// Why a clock stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCause {
    /// The pet passed out.
    Expired,
    /// The owner stopped the clock.
    Halted,
}

/// Run state of a clock. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Running,
    Stopped(StopCause),
}

impl ClockState {
    pub fn is_running(self) -> bool {
        self == ClockState::Running
    }
}

/// One-shot notice that a pet passed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expiry {
    /// Title-cased display name.
    pub name: String,
    pub species: Species,
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "your {} {} has passed out", self.species, self.name)
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The pet is still alive, in this mood.
    Alive(Mood),
    /// This tick pushed the pet into the terminal mood.
    Expired(Expiry),
    /// The clock was already stopped; nothing changed.
    Stopped,
}

pub struct Habitat {
    pet: PetState,
    state: ClockState,
    care_rng: StdRng,
    tick_rng: StdRng,
    expiry_tx: Option<oneshot::Sender<Expiry>>,
}

impl Habitat {
    /// Build a habitat around `pet`. Returns the receiving half of the expiry
    /// notification, which fires at most once.
    ///
    /// With a seed both generators are reproducible; without one they are
    /// seeded from the operating system.
    pub fn new(pet: PetState, seed: Option<u64>) -> (Self, oneshot::Receiver<Expiry>) {
        let (care_rng, tick_rng) = match seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
        };
        let (tx, rx) = oneshot::channel();

        let habitat = Self {
            pet,
            state: ClockState::Running,
            care_rng,
            tick_rng,
            expiry_tx: Some(tx),
        };
        (habitat, rx)
    }

    pub fn shared(self) -> SharedHabitat {
        Arc::new(Mutex::new(self))
    }

    pub fn pet(&self) -> &PetState {
        &self.pet
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Age the pet by one tick and check whether it passed out.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Stopped;
        }

        let hunger = self.tick_rng.random_range(TICK_INCREMENT);
        let boredom = self.tick_rng.random_range(TICK_INCREMENT);
        self.pet.worsen(hunger, boredom);

        let mood = self.pet.mood();
        debug!(
            hunger = self.pet.hunger(),
            boredom = self.pet.boredom(),
            %mood,
            "tick"
        );

        if !mood.is_terminal() {
            return TickOutcome::Alive(mood);
        }

        self.state = ClockState::Stopped(StopCause::Expired);
        let expiry = Expiry {
            name: self.pet.name(),
            species: self.pet.species(),
        };
        info!("{} passed out", expiry.name);

        if let Some(tx) = self.expiry_tx.take() {
            if tx.send(expiry.clone()).is_err() {
                debug!("Nobody is listening for the expiry notice");
            }
        }
        TickOutcome::Expired(expiry)
    }

    /// Stop the clock without an expiry notice. Returns `false` if it was
    /// already stopped.
    pub fn halt(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.state = ClockState::Stopped(StopCause::Halted);
        // Dropping the sender tells the listener no notice is coming.
        self.expiry_tx = None;
        true
    }

    /// Feed the pet; returns the new hunger.
    pub fn feed(&mut self, portion: Portion) -> Result<u64> {
        self.ensure_alive()?;
        let amount = portion
            .resolve("feed", &mut self.care_rng)
            .map_err(|e| {
                warn!("Rejected feed: {e}");
                e
            })?;
        Ok(self.pet.relieve_hunger(amount))
    }

    /// Play with the pet; returns the new boredom.
    pub fn play(&mut self, portion: Portion) -> Result<u64> {
        self.ensure_alive()?;
        let amount = portion
            .resolve("play", &mut self.care_rng)
            .map_err(|e| {
                warn!("Rejected play: {e}");
                e
            })?;
        Ok(self.pet.relieve_boredom(amount))
    }

    pub fn status_report(&self) -> StatusReport {
        self.pet.status_report()
    }

    pub fn speak(&self) -> &'static str {
        self.pet.speak()
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.state == ClockState::Stopped(StopCause::Expired) {
            return Err(PetError::PetExpired {
                name: Arc::new(self.pet.name()),
            });
        }
        Ok(())
    }
}
