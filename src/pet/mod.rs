//! Pet data model.
//!
//! Everything here is plain data with no locking or timing; the clock and the
//! session wrap it for concurrent use.

pub mod care;
pub mod mood;
pub mod species;
pub mod state;

pub use care::Portion;
pub use mood::Mood;
pub use species::Species;
pub use state::{PetState, StatusReport};
