//! `checkout-store` — store state and input loading for the checkout
//! simulator.
//!
//! # What lives here
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`customer`] | `Customer`, `CustomerType`                      |
//! | [`register`] | `Register`                                      |
//! | [`store`]    | `Store` — time, registers, pending pool         |
//! | [`loader`]   | `load_store`, `load_store_reader`               |
//! | [`error`]    | `StoreError`, `StoreResult`                     |
//!
//! The types here are pure data holders: all state transitions (item
//! processing, retirement, admission) live in `checkout-sim`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod customer;
pub mod error;
pub mod loader;
pub mod register;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use customer::{Customer, CustomerType};
pub use error::{StoreError, StoreResult};
pub use loader::{load_store, load_store_reader};
pub use register::Register;
pub use store::Store;
