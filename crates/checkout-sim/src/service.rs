//! Register service — item processing and customer retirement.

use checkout_store::Store;

use crate::SimObserver;

/// Run one service pass over every busy register at the store's current time.
///
/// Per register: complete the current item if its per-item time has fully
/// elapsed (checked for equality — the step-wise integer-time model never
/// overshoots), retire the front customer once it has no items left, skip
/// past any queued customers that already have zero items, and restart the
/// item timer when a new customer reaches the front.
///
/// Never fails given a store that passed load-time validation.
pub fn process_registers<O: SimObserver>(store: &mut Store, observer: &mut O) {
    let now = store.time;

    for register in &mut store.registers {
        let rate = register.processing_time_per_item();
        let started = register.item_processing_start_time;

        // ── Finish the current item if enough time has elapsed ────────────
        let front_finished = match register.queue.front_mut() {
            None => continue,
            Some(front) => {
                if now.since(started) == rate && front.remaining_items > 0 {
                    front.remaining_items -= 1;
                    // A fresh item starts now.
                    register.item_processing_start_time = now;
                }
                front.remaining_items == 0
            }
        };
        if !front_finished {
            continue;
        }

        // ── Retire the front customer, cascading past zero-item fronts ────
        //
        // The cascade guards against a customer that arrived with zero items
        // ever being observed at the front of a line on a later step.
        while register
            .queue
            .front()
            .is_some_and(|c| c.remaining_items == 0)
        {
            if let Some(mut retired) = register.queue.pop_front() {
                retired.register = None;
                observer.on_customer_retired(now, &retired, register);
            }
        }

        // ── Begin serving the new front customer, if any ──────────────────
        if !register.queue.is_empty() {
            register.item_processing_start_time = now;
            observer.on_service_start(now, register);
        }
    }
}
