//! # Virtual Pet
//!
//! A single virtual pet whose hunger and boredom grow on a background clock.
//! Feeding and playing push them back down; when the combined mood factor
//! reaches the worst tier the pet passes out, the clock stops itself and a
//! one-shot expiry notice goes out.
//!
//! ```rust,no_run
//! use virtual_pet::{PetSession, PetState, Portion, Species};
//!
//! #[tokio::main]
//! async fn main() -> virtual_pet::Result<()> {
//!     let mut session = PetSession::start(PetState::new("rex", Species::Dog));
//!     session.feed(Portion::Fixed)?;
//!     println!("{}", session.status_report()?);
//!
//!     if let Some(expiry) = session.expired().await {
//!         println!("It seems that {expiry}!");
//!     }
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod errors;
pub mod interactive;
pub mod pet;
pub mod session;

pub use clock::{ClockState, Expiry, PetClock, StopCause, TickOutcome, TICK_INTERVAL};
pub use config::{load_config, GameConfig};
pub use errors::{PetError, Result};
pub use pet::{Mood, PetState, Portion, Species, StatusReport};
pub use session::{PetSession, SessionOptions};
