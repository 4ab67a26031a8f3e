//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted collection elements without ceremony.  The inner integer is `pub`
//! because the two wrappers carry different numbering conventions (documented
//! on each type) and callers occasionally need the raw value for display.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// A customer's 1-based sequence number, assigned in input order.
    ///
    /// Used only as a stable identity for tracing — never in ordering or
    /// register-choice logic.
    pub struct CustomerId(u32);
}

typed_id! {
    /// Index of a register in `Store::registers` (0-based).
    ///
    /// The human-facing register *number* is 1-based; see
    /// `Register::number()` in `checkout-store`.
    pub struct RegisterId(u32);
}

impl RegisterId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
