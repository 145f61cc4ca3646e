//! Book records
//!
//! The single domain entity served by bookshelf, plus the two request
//! shapes that feed it:
//!
//! - `BookInput`: body of create and full-replace requests
//! - `BookPatch`: checked partial update, each recognized field optional

mod patch;
mod record;

pub use patch::{BookPatch, PatchError, PatchFields};
pub use record::{Book, BookId, BookInput};
