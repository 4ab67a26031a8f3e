//! `checkout-core` — foundational types for the checkout simulator.
//!
//! This crate is a dependency of every other `checkout-*` crate.  It
//! intentionally has no `checkout-*` dependencies and no required external
//! ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                          |
//! |----------|-----------------------------------|
//! | [`ids`]  | `CustomerId`, `RegisterId`        |
//! | [`time`] | `Minute`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CustomerId, RegisterId};
pub use time::Minute;
