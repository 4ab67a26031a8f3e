//! Arrival admission — policy-driven register selection.

use std::mem;

use checkout_core::RegisterId;
use checkout_store::{CustomerType, Store};

use crate::SimObserver;

/// Admit every pending customer whose arrival time has been reached.
///
/// The admission batch is processed in a fixed total order — arrival time
/// ascending, then item count ascending, then type A before type B — so an
/// earlier customer's choice changes the register occupancy that later
/// customers in the same batch observe.
pub fn admit_arrivals<O: SimObserver>(store: &mut Store, observer: &mut O) {
    let now = store.time;

    // Partition the due customers out of the pending pool, preserving input
    // order so the stable sort breaks full-key ties by input order.
    let (mut batch, kept): (Vec<_>, Vec<_>) = mem::take(&mut store.pending)
        .into_iter()
        .partition(|c| c.arrival_time <= now);
    store.pending = kept;

    batch.sort_by_key(|c| (c.arrival_time, c.item_count, c.customer_type));

    for mut customer in batch {
        let chosen = choose_register(store, customer.customer_type);
        customer.register = Some(chosen);

        let register = &mut store.registers[chosen.index()];
        register.queue.push_back(customer);
        let position = register.queue.len() - 1;

        if position == 0 {
            // First in line: service begins immediately.
            register.item_processing_start_time = now;
        }
        observer.on_customer_admitted(now, register, position);
        if position == 0 {
            observer.on_service_start(now, register);
        }
    }
}

/// Pick the register a newly-arrived customer of the given type joins.
///
/// Pure with respect to the store: the tie-break rules live entirely in this
/// one dispatch so they can be audited in one place.  Both policies resolve
/// ties by register creation order (first register found wins).
pub fn choose_register(store: &Store, customer_type: CustomerType) -> RegisterId {
    match customer_type {
        // Type A: the register with the fewest customers in line.
        CustomerType::A => shortest_line(store),

        // Type B: an empty line if one exists — empty always beats
        // non-empty — otherwise the line whose last customer has the fewest
        // items left to check out.
        CustomerType::B => empty_line(store).unwrap_or_else(|| lightest_tail(store)),
    }
}

// ── Policy primitives ─────────────────────────────────────────────────────────

fn shortest_line(store: &Store) -> RegisterId {
    // `Store::new` guarantees at least one register.
    let mut best = RegisterId(0);
    let mut best_len = usize::MAX;
    for register in &store.registers {
        if register.queue.len() < best_len {
            best = register.id;
            best_len = register.queue.len();
        }
    }
    best
}

fn empty_line(store: &Store) -> Option<RegisterId> {
    store
        .registers
        .iter()
        .find(|r| r.queue.is_empty())
        .map(|r| r.id)
}

fn lightest_tail(store: &Store) -> RegisterId {
    // Only reached when every queue is non-empty.
    let mut best = RegisterId(0);
    let mut best_items = u64::MAX;
    for register in &store.registers {
        if let Some(tail) = register.queue.back() {
            if tail.remaining_items < best_items {
                best = register.id;
                best_items = tail.remaining_items;
            }
        }
    }
    best
}
