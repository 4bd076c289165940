//! Persistence error type.

use thiserror::Error;

/// Errors produced while writing or reading the catalog artifact.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog encoding error: {0}")]
    Codec(#[from] bincode::Error),
}

pub type PersistResult<T> = Result<T, PersistError>;
