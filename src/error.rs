//! Errors for the account store and its storage backends.
//!
//! The store performs no validation or recovery of its own, so every variant
//! here describes a failure of something underneath it:
//! - the storage backend (I/O, backend-reported failures)
//! - JSON encoding/decoding of the persisted account list
//! - rendering output or addressing an account that is not there

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[error("No account at index {index} ({len} stored)")]
    IndexOutOfRange { index: usize, len: usize },
}
