//! Store error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::book::{BookId, PatchError};

/// Result type for file and lock level store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// Failures of the backing file or of the collection lock
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open books file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse books file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize books: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write books file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Books file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Book collection lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Short machine-readable code, used in log fields
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Open { .. } => "BOOKS_OPEN_FAILED",
            StoreError::Parse { .. } => "BOOKS_PARSE_FAILED",
            StoreError::Serialize(_) => "BOOKS_SERIALIZE_FAILED",
            StoreError::Write { .. } => "BOOKS_WRITE_FAILED",
            StoreError::AlreadyExists(_) => "BOOKS_ALREADY_EXISTS",
            StoreError::LockPoisoned => "BOOKS_LOCK_POISONED",
        }
    }
}

/// Failures of a single book operation
#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book not found: {0}")]
    NotFound(BookId),

    #[error("Invalid patch: {0}")]
    InvalidPatch(#[from] PatchError),

    #[error("No book ids left after {0}")]
    IdsExhausted(BookId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
