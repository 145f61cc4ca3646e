//! Book record and the create/replace request shape

use serde::{Deserialize, Serialize};

/// Book identifier
pub type BookId = i64;

/// A persisted book.
///
/// Field order is significant: it is the order written to the backing file
/// and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Create a book from request input, discarding any client-supplied id
    pub fn from_input(id: BookId, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
        }
    }
}

/// Body of a create or full-replace request.
///
/// Missing `title`/`author` default to empty strings. A client `id` is
/// accepted so that a full record can be posted back, but it is never used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookInput {
    #[serde(default)]
    pub id: Option<BookId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}
