//! Backing file for the book collection
//!
//! The file holds a single JSON array of books, pretty-printed with two-space
//! indentation. A save writes the whole collection to a sibling temp file,
//! fsyncs it, then renames it over the books file, so a failed save leaves
//! the previous contents in place.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use crate::book::Book;

/// Handle to the books JSON file
#[derive(Debug, Clone)]
pub struct BooksFile {
    path: PathBuf,
}

impl BooksFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole collection
    pub fn load(&self) -> StoreResult<Vec<Book>> {
        let bytes = fs::read(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Path of the temp file used while saving
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Replace the file with the given collection
    pub fn save(&self, books: &[Book]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(books).map_err(StoreError::Serialize)?;
        let temp_path = self.temp_path();

        let result = Self::write_synced(&temp_path, &bytes)
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if let Err(source) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }

        // fsync the directory so the rename survives a crash
        if let Some(parent) = self.path.parent() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    /// Create the file holding an empty collection.
    ///
    /// Fails if the file already exists.
    pub fn create_empty(&self) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|source| match source.kind() {
                ErrorKind::AlreadyExists => StoreError::AlreadyExists(self.path.clone()),
                _ => StoreError::Write {
                    path: self.path.clone(),
                    source,
                },
            })?;

        file.write_all(b"[]").map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}
