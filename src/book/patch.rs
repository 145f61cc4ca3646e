//! Partial book updates
//!
//! A patch body is an arbitrary JSON object. Only `title` and `author` are
//! recognized; anything else is ignored. A recognized key whose value is not
//! a string rejects the whole patch before any field is touched.
//!
//! Decoding is deferred until the target book has been found, so a missing
//! book is reported ahead of a malformed field.

use serde_json::{Map, Value};
use thiserror::Error;

use super::record::Book;

/// Raw patch body: any JSON object
pub type PatchFields = Map<String, Value>;

/// Reasons a patch body is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("Field '{0}' must be a string")]
    WrongType(&'static str),
}

/// Checked partial update of a book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookPatch {
    /// Decode a patch from a JSON object
    pub fn from_fields(mut fields: PatchFields) -> Result<Self, PatchError> {
        Ok(Self {
            title: take_string(&mut fields, "title")?,
            author: take_string(&mut fields, "author")?,
        })
    }

    /// Overwrite the fields present in this patch
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
    }
}

fn take_string(fields: &mut PatchFields, key: &'static str) -> Result<Option<String>, PatchError> {
    match fields.remove(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(PatchError::WrongType(key)),
    }
}
