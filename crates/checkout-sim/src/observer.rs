//! Simulation observer trait for tracing and data collection.

use checkout_core::Minute;
use checkout_store::{Customer, Register};

/// Callbacks invoked by the driver and phase functions at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The simulation core itself never logs
/// or prints; anything user-visible goes through an observer.
pub trait SimObserver {
    /// Called after the clock advances, before the service pass.
    fn on_step_start(&mut self, _time: Minute) {}

    /// Called when a customer joins a register's line.
    ///
    /// `register.queue[position]` is the newly-admitted customer (always the
    /// back of the queue).
    fn on_customer_admitted(&mut self, _time: Minute, _register: &Register, _position: usize) {}

    /// Called when a register begins serving the customer now at the front
    /// of its queue (either just admitted to an empty line, or promoted
    /// after the previous customer retired).
    fn on_service_start(&mut self, _time: Minute, _register: &Register) {}

    /// Called when a customer's last item is processed and it leaves the
    /// store.  `customer.register` has already been cleared.
    fn on_customer_retired(&mut self, _time: Minute, _customer: &Customer, _register: &Register) {}

    /// Called once when the simulation reaches its final time.
    fn on_sim_end(&mut self, _final_time: Minute) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

// ── TraceObserver ─────────────────────────────────────────────────────────────

/// Logs every customer transition at `debug` level via the `log` crate.
///
/// The projected completion times in these messages are diagnostic only —
/// they are recomputed from queue contents and never influence the
/// simulation itself.
pub struct TraceObserver;

impl SimObserver for TraceObserver {
    fn on_customer_admitted(&mut self, time: Minute, register: &Register, position: usize) {
        let Some(customer) = register.queue.get(position) else {
            return;
        };
        if position == 0 {
            log::debug!(
                "{time}: customer #{} (type {}) arrives with {} items and goes to register #{}",
                customer.id.0,
                customer.customer_type,
                customer.remaining_items,
                register.number(),
            );
        } else {
            log::debug!(
                "{time}: customer #{} (type {}) arrives with {} items and goes to register #{}, \
                 behind customer #{}; projected done at {}",
                customer.id.0,
                customer.customer_type,
                customer.remaining_items,
                register.number(),
                register.queue[position - 1].id.0,
                projected_completion(register, time),
            );
        }
    }

    fn on_service_start(&mut self, time: Minute, register: &Register) {
        let Some(front) = register.queue.front() else {
            return;
        };
        log::debug!(
            "{time}: register #{} starts serving customer #{} ({} items, projected done at {})",
            register.number(),
            front.id.0,
            front.remaining_items,
            Minute(time.0 + front.remaining_items * register.processing_time_per_item()),
        );
    }

    fn on_customer_retired(&mut self, time: Minute, customer: &Customer, register: &Register) {
        if customer.item_count == 0 {
            log::debug!(
                "{time}: customer #{} left register #{} (had 0 items and was skipped)",
                customer.id.0,
                register.number(),
            );
        } else {
            log::debug!(
                "{time}: customer #{} left register #{}",
                customer.id.0,
                register.number(),
            );
        }
    }

    fn on_sim_end(&mut self, final_time: Minute) {
        log::debug!("finished at {final_time}");
    }
}

/// The minute at which the last customer in `register`'s line will finish,
/// assuming nobody else joins: the remainder of the front customer's current
/// item, the front's other items, then every waiting customer's items.
pub(crate) fn projected_completion(register: &Register, now: Minute) -> Minute {
    let rate = register.processing_time_per_item();
    let mut end = now.0;
    if let Some(front) = register.queue.front() {
        if front.remaining_items > 0 {
            // The current item has been in progress since the register's
            // item timer last reset; elapsed is always < rate here.
            let elapsed = now.since(register.item_processing_start_time);
            end += (front.remaining_items - 1) * rate + (rate - elapsed);
        }
        for waiting in register.queue.iter().skip(1) {
            end += waiting.remaining_items * rate;
        }
    }
    Minute(end)
}
