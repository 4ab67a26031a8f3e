//! The `Sim` driver and its two-state run loop.

use checkout_core::Minute;
use checkout_store::Store;

use crate::{admission, service, SimObserver};

/// The driver's state, evaluated from the store at the top of every step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    /// Customers remain pending or queued; the clock keeps advancing.
    Running,
    /// Every line is empty and no customer is still pending — terminal.
    Finished,
}

/// The simulation driver.
///
/// Owns the [`Store`] exclusively for the duration of the run and hands it
/// to the two phase functions in a fixed order each step:
///
/// 1. advance the clock by one minute,
/// 2. [`service::process_registers`] — finish items, retire customers,
/// 3. [`admission::admit_arrivals`] — seat newly-arrived customers.
///
/// Customers whose arrival time is 0 are admitted by a one-time priming
/// pass before the clock first advances, so their service starts at t=0.
///
/// The driver performs no I/O; it returns the final time and leaves
/// formatting to the caller.
pub struct Sim {
    pub store: Store,
    primed: bool,
}

impl Sim {
    /// Wrap a freshly-loaded store.  The clock must not have advanced yet.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            primed: false,
        }
    }

    /// The driver state as of the current store contents.
    pub fn state(&self) -> RunState {
        if self.store.is_idle() {
            RunState::Finished
        } else {
            RunState::Running
        }
    }

    /// Run until no customer remains pending or in line; returns the final
    /// simulation time.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Minute {
        while self.step(observer) == RunState::Running {}
        observer.on_sim_end(self.store.time);
        self.store.time
    }

    /// Advance the simulation by one time step.
    ///
    /// Returns the driver state after the step.  Callers that single-step
    /// the simulation loop on this until it reports
    /// [`RunState::Finished`].
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> RunState {
        if !self.primed {
            // Priming pass: seat the t=0 arrivals before the clock moves.
            admission::admit_arrivals(&mut self.store, observer);
            self.primed = true;
        }
        if self.store.is_idle() {
            return RunState::Finished;
        }

        self.store.advance();
        observer.on_step_start(self.store.time);
        service::process_registers(&mut self.store, observer);
        admission::admit_arrivals(&mut self.store, observer);

        self.state()
    }
}
