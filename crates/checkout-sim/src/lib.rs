//! `checkout-sim` — the minute-step loop for the checkout simulator.
//!
//! # Step loop
//!
//! ```text
//! admit arrivals at t=0                 (priming pass)
//! while any customer is queued or pending:
//!   ① Advance    — time += 1
//!   ② Service    — every busy register: finish the current item when its
//!                  per-item time has fully elapsed; retire customers that
//!                  reach zero items (cascading past zero-item fronts);
//!                  restart the item timer for a new front.
//!   ③ Admission  — pending customers whose arrival time is due, ordered by
//!                  (arrival, item count, type A before B), each pick a
//!                  register by their type's policy and join its line.
//! final time = the minute the last customer left
//! ```
//!
//! The loop is single-threaded and deterministic: given the same input it
//! always produces the same final time.  It has no failure paths — all
//! validation happens in `checkout-store` at load time.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use checkout_sim::{NoopObserver, Sim};
//! use checkout_store::load_store;
//!
//! let store = load_store(path)?;
//! let final_time = Sim::new(store).run(&mut NoopObserver);
//! println!("Finished at: {final_time} minutes");
//! ```

pub mod admission;
pub mod observer;
pub mod service;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use admission::choose_register;
pub use observer::{NoopObserver, SimObserver, TraceObserver};
pub use sim::{RunState, Sim};
