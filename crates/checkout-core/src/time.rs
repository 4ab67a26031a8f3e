//! Simulation time model.
//!
//! Time is a monotonically increasing `Minute` counter: the simulation
//! advances in whole one-minute steps and every duration (item processing,
//! arrival offsets) is a whole number of minutes.  Using an integer as the
//! canonical time unit keeps all elapsed-time arithmetic exact and makes the
//! "item completes when elapsed time *equals* the per-item duration" rule an
//! ordinary `==` comparison.

use std::fmt;

/// An absolute simulation time in minutes since the start of the run.
///
/// Displays as `t=<N>`, which is also the form the final result line uses.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Minute) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u64) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
