//! Store simulation state.

use checkout_core::{Minute, RegisterId};

use crate::{Customer, Register, StoreError, StoreResult};

/// The complete state of one simulation run: the clock, the fixed set of
/// registers, and the customers that have not yet arrived.
///
/// `Store` is a pure data holder.  It is owned exclusively by the driver in
/// `checkout-sim` for the duration of a run; the phase functions there
/// receive it by `&mut` and hand it to the next phase.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Store {
    /// Current simulation time.  Starts at zero and advances by one minute
    /// per step.
    pub time: Minute,

    /// The registers, in creation order.  The count is fixed for the run;
    /// no component adds or removes registers after construction.
    pub registers: Vec<Register>,

    /// Customers whose arrival time has not yet been reached.  Storage
    /// order is irrelevant; each customer carries its own arrival time.
    pub pending: Vec<Customer>,
}

impl Store {
    /// Create a store with `register_count` empty registers, numbered 1..n.
    /// The last register (highest number) is the training register — always,
    /// including single-register stores.
    pub fn new(register_count: u32) -> StoreResult<Self> {
        if register_count == 0 {
            return Err(StoreError::Configuration(
                "register count must be greater than 0".into(),
            ));
        }
        let registers = (0..register_count)
            .map(|i| Register::new(RegisterId(i), i == register_count - 1))
            .collect();
        Ok(Self {
            time: Minute::ZERO,
            registers,
            pending: Vec::new(),
        })
    }

    /// Advance the clock by one minute.
    #[inline]
    pub fn advance(&mut self) {
        self.time = self.time + 1;
    }

    /// True when no customers remain pending or in any register line — the
    /// simulation's termination condition.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.registers.iter().all(|r| r.queue.is_empty())
    }

    /// Total customers currently waiting at registers.
    pub fn queued_customers(&self) -> usize {
        self.registers.iter().map(|r| r.queue.len()).sum()
    }
}
