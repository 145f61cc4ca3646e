//! bookshelf - a book catalogue served over HTTP
//!
//! The collection lives in memory and is mirrored to a single JSON file,
//! rewritten in full after every mutation.

pub mod book;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
