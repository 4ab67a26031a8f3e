//! checkout — simulate customers queueing at store registers.
//!
//! Reads an input file (register count on the first line, one customer
//! record per subsequent line), runs the minute-step simulation to
//! completion, and prints the finishing time:
//!
//! ```text
//! $ checkout input.txt
//! Finished at: t=8 minutes
//! ```
//!
//! Set `RUST_LOG=debug` for a per-event trace of admissions, service starts,
//! and retirements.  Exit status is 0 on success and nonzero on any load
//! failure (bad register count, malformed record, unreadable file).

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use checkout_sim::{Sim, TraceObserver};
use checkout_store::load_store;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args_os().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        bail!("usage: checkout <input-file>");
    };
    let path = PathBuf::from(path);

    let store = load_store(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    log::info!(
        "loaded {} registers (#{} is the training register) and {} customers",
        store.registers.len(),
        store.registers.len(),
        store.pending.len(),
    );

    let mut sim = Sim::new(store);
    let final_time = sim.run(&mut TraceObserver);

    println!("Finished at: {final_time} minutes");
    Ok(())
}
