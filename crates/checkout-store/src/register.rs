//! Checkout registers.

use std::collections::VecDeque;

use checkout_core::{Minute, RegisterId};

use crate::Customer;

/// A single checkout register and the line of customers waiting at it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Register {
    /// Index of this register in `Store::registers`.
    pub id: RegisterId,

    /// The training register processes items at half speed.  Exactly one
    /// register per store is a training register: the highest-numbered one.
    pub is_training: bool,

    /// Customers waiting in line; the front customer is being served.
    pub queue: VecDeque<Customer>,

    /// The minute at which the front customer's current item began
    /// processing.  Meaningful only while `queue` is non-empty; reset
    /// whenever a new customer reaches the front or an item boundary is
    /// crossed.
    pub item_processing_start_time: Minute,
}

impl Register {
    pub fn new(id: RegisterId, is_training: bool) -> Self {
        Self {
            id,
            is_training,
            queue: VecDeque::new(),
            item_processing_start_time: Minute::ZERO,
        }
    }

    /// The human-facing register number (1-based).
    #[inline]
    pub fn number(&self) -> u32 {
        self.id.0 + 1
    }

    /// Minutes needed to process one item at this register.
    #[inline]
    pub fn processing_time_per_item(&self) -> u64 {
        if self.is_training { 2 } else { 1 }
    }
}
