//! `s4r-persistence` error type.

use thiserror::Error;

/// Errors produced while encoding, decoding, or moving snapshot bytes
/// through a [`crate::PersistenceSink`].
///
/// Per §7 of the design spec, these are `SnapshotIOError`s: worker 0
/// surfaces them but the driver is not required to abort its peers' next
/// step over one.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot I/O error: {0}")]
    SnapshotIo(#[from] std::io::Error),

    #[error("corrupt snapshot payload: {0}")]
    Corrupt(String),

    #[error("object encoding error: {0}")]
    Encode(#[from] Box<bincode::ErrorKind>),

    #[error("unknown snapshot key: {0}")]
    NotFound(String),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;
