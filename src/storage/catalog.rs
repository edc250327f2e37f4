//! Catalog repository for JSON storage
//!
//! Owns the in-memory catalog and manages loading and saving it to
//! books.json. The catalog is tiny, so lookups are linear scans over a Vec
//! that preserves insertion order from load/seed.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LibrisError, LibrisResult};
use crate::models::Book;

use super::file_io::{read_json, write_json_atomic};
use super::seed::default_books;

/// Serializable catalog file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CatalogData {
    books: Vec<Book>,
}

/// Repository for catalog persistence
pub struct CatalogRepository {
    path: PathBuf,
    data: RwLock<Vec<Book>>,
}

impl CatalogRepository {
    /// Create a new catalog repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load the catalog from disk
    ///
    /// A missing file is a valid empty catalog. Records are validated and
    /// ISBN uniqueness is checked, so a tampered store file is rejected
    /// rather than loaded into an inconsistent state.
    pub fn load(&self) -> LibrisResult<()> {
        let file_data: CatalogData = read_json(&self.path)?;

        for book in &file_data.books {
            book.validate().map_err(|e| {
                LibrisError::Storage(format!("Invalid record in catalog file: {}", e))
            })?;
        }

        for (i, a) in file_data.books.iter().enumerate() {
            if file_data.books[i + 1..].iter().any(|b| b.isbn == a.isbn) {
                return Err(LibrisError::Storage(format!(
                    "Duplicate ISBN in catalog file: {}",
                    a.isbn
                )));
            }
        }

        let mut data = self.write_lock()?;
        *data = file_data.books;

        Ok(())
    }

    /// Save the catalog to disk
    pub fn save(&self) -> LibrisResult<()> {
        let data = self.read_lock()?;
        save_to(&self.path, &data)
    }

    /// Seed the catalog with the default book set if it is empty
    ///
    /// Returns true if seeding happened. The seeded catalog is persisted
    /// immediately, matching first-run behavior.
    pub fn seed_if_empty(&self) -> LibrisResult<bool> {
        let mut data = self.write_lock()?;

        if !data.is_empty() {
            return Ok(false);
        }

        let books = default_books();
        save_to(&self.path, &books)?;
        *data = books;

        Ok(true)
    }

    /// Get all books in stored order
    pub fn get_all(&self) -> LibrisResult<Vec<Book>> {
        let data = self.read_lock()?;
        Ok(data.clone())
    }

    /// Get a book by ISBN
    pub fn get(&self, isbn: &str) -> LibrisResult<Option<Book>> {
        let data = self.read_lock()?;
        Ok(data.iter().find(|b| b.isbn == isbn).cloned())
    }

    /// Replace a book's record, persisting the whole catalog
    ///
    /// The record is matched by ISBN; position in the catalog is preserved.
    /// If the write to disk fails the previous record is restored, so the
    /// in-memory catalog never diverges from the stored one.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has the given ISBN, or `Storage` if
    /// persisting fails (after rolling back the in-memory change).
    pub fn update(&self, book: Book) -> LibrisResult<()> {
        let mut data = self.write_lock()?;

        let index = data
            .iter()
            .position(|b| b.isbn == book.isbn)
            .ok_or_else(|| LibrisError::book_not_found(&book.isbn))?;

        let previous = std::mem::replace(&mut data[index], book);

        if let Err(err) = save_to(&self.path, &data) {
            data[index] = previous;
            return Err(err);
        }

        Ok(())
    }

    /// Count books in the catalog
    pub fn count(&self) -> LibrisResult<usize> {
        let data = self.read_lock()?;
        Ok(data.len())
    }

    /// Get the path to the catalog file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_lock(&self) -> LibrisResult<std::sync::RwLockReadGuard<'_, Vec<Book>>> {
        self.data
            .read()
            .map_err(|e| LibrisError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> LibrisResult<std::sync::RwLockWriteGuard<'_, Vec<Book>>> {
        self.data
            .write()
            .map_err(|e| LibrisError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

/// Persist a snapshot of the catalog without touching the in-memory state
fn save_to(path: &PathBuf, books: &[Book]) -> LibrisResult<()> {
    let file_data = CatalogData {
        books: books.to_vec(),
    };
    write_json_atomic(path, &file_data)
}
