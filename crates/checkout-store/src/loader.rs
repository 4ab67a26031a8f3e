//! Line-oriented input loader.
//!
//! # Input format
//!
//! The first line is the register count; each subsequent non-empty line is
//! one customer record:
//!
//! ```text
//! 2
//! A 0 3
//! B 1 5
//! A 1 2
//! ```
//!
//! Record fields are whitespace-separated (extra interior spacing is
//! tolerated; trailing extra tokens are ignored):
//!
//! | Field         | Meaning                                          |
//! |---------------|--------------------------------------------------|
//! | `Type`        | `A` or `B` — the register-choice behavior        |
//! | `ArrivalTime` | Minute the customer arrives (non-negative)       |
//! | `ItemCount`   | Items to check out (non-negative; 0 is allowed)  |
//!
//! Records need not be sorted by arrival time; the whole file is loaded
//! before the simulation starts.  Any parse failure aborts the load with
//! the 1-based line number of the offending line — no partial simulation
//! is attempted.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use checkout_core::{CustomerId, Minute};

use crate::{Customer, CustomerType, Store, StoreError, StoreResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a fully-initialized [`Store`] from an input file.
pub fn load_store(path: &Path) -> StoreResult<Store> {
    let file = std::fs::File::open(path)?;
    load_store_reader(file)
}

/// Like [`load_store`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_store_reader<R: Read>(reader: R) -> StoreResult<Store> {
    let mut lines = BufReader::new(reader).lines();
    let mut line_number: u64 = 0;

    // ── Register count ────────────────────────────────────────────────────
    let first = match lines.next() {
        None => {
            return Err(StoreError::Configuration(
                "register count line is missing".into(),
            ));
        }
        Some(line) => line?,
    };
    line_number += 1;

    let register_count: u32 = first.trim().parse().map_err(|_| {
        StoreError::Configuration(format!(
            "invalid register count {:?}: expected a positive integer",
            first.trim()
        ))
    })?;
    let mut store = Store::new(register_count)?;

    // ── Customer records ──────────────────────────────────────────────────
    for line in lines {
        let line = line?;
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }
        let id = CustomerId(store.pending.len() as u32 + 1);
        let customer = parse_record(&line, id, line_number)?;
        store.pending.push(customer);
    }

    Ok(store)
}

// ── Record parsing ────────────────────────────────────────────────────────────

fn parse_record(line: &str, id: CustomerId, line_number: u64) -> StoreResult<Customer> {
    let mut fields = line.split_whitespace();

    let customer_type = match fields.next() {
        Some("A") => CustomerType::A,
        Some("B") => CustomerType::B,
        Some(other) => {
            return Err(malformed(
                line_number,
                format!("invalid customer type {other:?}: expected \"A\" or \"B\""),
            ));
        }
        // Unreachable for non-blank lines, but the parser shouldn't assume.
        None => return Err(malformed(line_number, "empty record".into())),
    };

    let arrival_time = match fields.next() {
        Some(token) => parse_non_negative(token, "arrival time", line_number)?,
        None => return Err(malformed(line_number, "missing arrival time".into())),
    };

    let item_count = match fields.next() {
        Some(token) => parse_non_negative(token, "item count", line_number)?,
        None => return Err(malformed(line_number, "missing item count".into())),
    };

    Ok(Customer::new(
        id,
        customer_type,
        Minute(arrival_time),
        item_count,
    ))
}

fn parse_non_negative(token: &str, what: &str, line_number: u64) -> StoreResult<u64> {
    match token.parse::<i64>() {
        Ok(v) if v >= 0 => Ok(v as u64),
        Ok(_) => Err(malformed(line_number, format!("{what} cannot be negative"))),
        Err(_) => Err(malformed(
            line_number,
            format!("invalid {what} {token:?}: expected a non-negative integer"),
        )),
    }
}

fn malformed(line: u64, reason: String) -> StoreError {
    StoreError::MalformedRecord { line, reason }
}
