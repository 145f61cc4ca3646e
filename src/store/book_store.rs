//! The book store

use std::path::Path;
use std::sync::RwLock;

use super::errors::{BookError, BookResult, StoreError, StoreResult};
use super::options::{IdStrategy, PersistFailurePolicy, StoreOptions};
use super::persist::BooksFile;
use crate::book::{Book, BookId, BookInput, BookPatch, PatchFields};
use crate::observability::{log_event_with_fields, Event};

/// In-memory books plus the id counter used by `IdStrategy::Monotonic`.
///
/// `next_id` is `None` once the counter has passed `BookId::MAX`.
#[derive(Debug, Clone)]
struct Collection {
    books: Vec<Book>,
    next_id: Option<BookId>,
}

impl Collection {
    fn new(books: Vec<Book>) -> Self {
        let next_id = match books.iter().map(|b| b.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { books, next_id }
    }

    fn assign_id(&mut self, strategy: IdStrategy) -> BookResult<BookId> {
        match strategy {
            IdStrategy::Length => {
                let len = self.books.len() as BookId;
                len.checked_add(1).ok_or(BookError::IdsExhausted(len))
            }
            IdStrategy::Monotonic => {
                let id = self.next_id.ok_or(BookError::IdsExhausted(BookId::MAX))?;
                self.next_id = id.checked_add(1);
                Ok(id)
            }
        }
    }

    fn position(&self, id: BookId) -> BookResult<usize> {
        self.books
            .iter()
            .position(|b| b.id == id)
            .ok_or(BookError::NotFound(id))
    }
}

/// Book collection backed by a JSON file.
///
/// Lookups scan in order and act on the first book with a matching id.
pub struct BookStore {
    collection: RwLock<Collection>,
    file: BooksFile,
    options: StoreOptions,
}

impl BookStore {
    /// Load the collection from `path`.
    ///
    /// # Errors
    ///
    /// `StoreError::Open` if the file cannot be read, `StoreError::Parse` if
    /// it is not a JSON array of books.
    pub fn open(path: impl AsRef<Path>, options: StoreOptions) -> StoreResult<Self> {
        let file = BooksFile::new(path.as_ref());
        let books = file.load()?;

        let path = file.path().display().to_string();
        let count = books.len().to_string();
        log_event_with_fields(
            Event::BooksLoaded,
            &[("path", path.as_str()), ("count", count.as_str())],
        );

        Ok(Self {
            collection: RwLock::new(Collection::new(books)),
            file,
            options,
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// All books, in collection order
    pub fn list(&self) -> BookResult<Vec<Book>> {
        let collection = self.collection.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(collection.books.clone())
    }

    pub fn get(&self, id: BookId) -> BookResult<Book> {
        let collection = self.collection.read().map_err(|_| StoreError::LockPoisoned)?;
        let index = collection.position(id)?;
        Ok(collection.books[index].clone())
    }

    /// Append a new book and persist
    pub fn create(&self, input: BookInput) -> BookResult<Book> {
        let strategy = self.options.id_strategy;
        let book = self.mutate(|collection| {
            let id = collection.assign_id(strategy)?;
            let book = Book::from_input(id, input);
            collection.books.push(book.clone());
            Ok(book)
        })?;

        log_event_with_fields(Event::BookCreated, &[("id", book.id.to_string().as_str())]);
        Ok(book)
    }

    /// Replace every field except the id and persist
    pub fn replace(&self, id: BookId, input: BookInput) -> BookResult<Book> {
        let book = self.mutate(|collection| {
            let index = collection.position(id)?;
            let book = Book::from_input(id, input);
            collection.books[index] = book.clone();
            Ok(book)
        })?;

        log_event_with_fields(Event::BookUpdated, &[("id", id.to_string().as_str())]);
        Ok(book)
    }

    /// Overwrite the recognized fields present in `fields` and persist.
    ///
    /// The book is looked up before the fields are type-checked.
    pub fn patch(&self, id: BookId, fields: PatchFields) -> BookResult<Book> {
        let book = self.mutate(|collection| {
            let index = collection.position(id)?;
            let patch = BookPatch::from_fields(fields)?;
            let book = &mut collection.books[index];
            patch.apply(book);
            Ok(book.clone())
        })?;

        log_event_with_fields(Event::BookPatched, &[("id", id.to_string().as_str())]);
        Ok(book)
    }

    /// Remove a book, keeping the order of the rest, and persist.
    ///
    /// Returns the removed book.
    pub fn delete(&self, id: BookId) -> BookResult<Book> {
        let book = self.mutate(|collection| {
            let index = collection.position(id)?;
            Ok(collection.books.remove(index))
        })?;

        log_event_with_fields(Event::BookDeleted, &[("id", id.to_string().as_str())]);
        Ok(book)
    }

    /// Run `op` under the write lock and persist the result.
    ///
    /// A failing `op` writes nothing. If `op` or the save fails, the
    /// collection is restored before the lock is released.
    fn mutate<T, F>(&self, op: F) -> BookResult<T>
    where
        F: FnOnce(&mut Collection) -> BookResult<T>,
    {
        let mut collection = self.collection.write().map_err(|_| StoreError::LockPoisoned)?;
        let before = collection.clone();

        let value = match op(&mut *collection) {
            Ok(value) => value,
            Err(err) => {
                *collection = before;
                return Err(err);
            }
        };

        if let Err(err) = self.file.save(&collection.books) {
            *collection = before;
            self.persist_failed(&err);
            return Err(err.into());
        }

        Ok(value)
    }

    fn persist_failed(&self, err: &StoreError) {
        let message = err.to_string();
        let path = self.file.path().display().to_string();
        log_event_with_fields(
            Event::PersistFailed,
            &[
                ("code", err.code()),
                ("error", message.as_str()),
                ("path", path.as_str()),
            ],
        );

        if self.options.on_persist_failure == PersistFailurePolicy::Exit {
            std::process::exit(1);
        }
    }
}
