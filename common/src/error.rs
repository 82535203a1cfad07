//! Error types

use thiserror::Error;

/// Errors raised by the ordering rules
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Entries cannot be reordered by hand while sorting by {0}")]
    ReorderLocked(&'static str),

    #[error("Index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
