//! Feeding and playing amounts.

use std::ops::Range;

use rand::Rng;

use crate::errors::{PetError, Result};

/// Amount removed by a fixed feed/play.
pub const FIXED_AMOUNT: u64 = 5;

/// Range of a randomized feed/play.
pub const RANDOM_AMOUNT: Range<u64> = 3..8;

/// How much a feed or play action should relieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portion {
    /// Always [`FIXED_AMOUNT`].
    Fixed,
    /// Uniform draw from [`RANDOM_AMOUNT`].
    Random,
    /// Caller-chosen amount. Negative amounts are rejected.
    Custom(i64),
}

impl Portion {
    /// Resolve into a concrete amount.
    ///
    /// `action` names the care action for the error message.
    pub fn resolve<R: Rng + ?Sized>(self, action: &'static str, rng: &mut R) -> Result<u64> {
        match self {
            Portion::Fixed => Ok(FIXED_AMOUNT),
            Portion::Random => Ok(rng.random_range(RANDOM_AMOUNT)),
            Portion::Custom(amount) => {
                u64::try_from(amount).map_err(|_| PetError::InvalidAmount { action, amount })
            }
        }
    }
}
