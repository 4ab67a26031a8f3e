//! Customers and their register-choice behavior types.

use std::fmt;

use checkout_core::{CustomerId, Minute, RegisterId};

// ── CustomerType ──────────────────────────────────────────────────────────────

/// The register-choice behavior applied to a customer.
///
/// The set is closed: register selection is dispatched by a plain match in
/// `checkout-sim`, not by trait objects.
///
/// - **Type A** always chooses the register with the fewest customers in
///   line.
/// - **Type B** looks at the last customer in each line and chooses to stand
///   behind the one with the fewest items left, but always prefers an empty
///   line over any non-empty one.
///
/// The derived `Ord` (`A < B`) is load-bearing: when customers arrive in the
/// same minute with the same item count, type A's choose before type B's.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerType {
    A,
    B,
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerType::A => write!(f, "A"),
            CustomerType::B => write!(f, "B"),
        }
    }
}

// ── Customer ──────────────────────────────────────────────────────────────────

/// A simulated customer.
///
/// A customer is owned by exactly one of the store's pending pool or one
/// register's queue — never both — until it retires (leaves the store).
/// `register` is a non-owning back-reference kept for tracing.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    /// 1-based sequence number from input order; identity for tracing only.
    pub id: CustomerId,

    pub customer_type: CustomerType,

    /// The minute at which the customer arrives at the registers.
    pub arrival_time: Minute,

    /// The item count as parsed from input.  Never changes; also the second
    /// component of the admission sort key.
    pub item_count: u64,

    /// Items not yet processed by a cashier.  Starts equal to `item_count`
    /// and counts down while the customer is at the front of a queue.
    pub remaining_items: u64,

    /// The register this customer is queued at, if any.
    pub register: Option<RegisterId>,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        customer_type: CustomerType,
        arrival_time: Minute,
        item_count: u64,
    ) -> Self {
        Self {
            id,
            customer_type,
            arrival_time,
            item_count,
            remaining_items: item_count,
            register: None,
        }
    }
}
