//! Load-time error type.
//!
//! All failures happen while loading and validating input; once a `Store`
//! has been constructed, the simulation loop itself has no failure paths.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The register count is missing, non-integer, or not positive.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A customer record line failed to parse.  Carries the 1-based input
    /// line number so the offending line can be found.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
