//! Book store
//!
//! Owns the in-memory book collection and its backing JSON file.
//!
//! # Design
//!
//! - The file is read once, at open. Absent or malformed files fail the open.
//! - Every mutation rewrites the whole file before the lock is released.
//! - A single `RwLock` serializes mutations; reads share it.
//! - A failed save restores the collection to its state before the mutation,
//!   then either surfaces the error or exits the process depending on
//!   `PersistFailurePolicy`.

mod book_store;
mod errors;
mod options;
mod persist;

pub use book_store::BookStore;
pub use errors::{BookError, BookResult, StoreError, StoreResult};
pub use options::{IdStrategy, PersistFailurePolicy, StoreOptions};
pub use persist::BooksFile;
