//! Storage layer for Libris
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole catalog is rewritten on every mutation; reads never
//! touch disk after the initial load.

pub mod catalog;
pub mod file_io;
pub mod seed;

pub use catalog::CatalogRepository;
pub use file_io::{read_json, write_json_atomic};
pub use seed::default_books;

use crate::config::paths::LibrisPaths;
use crate::error::LibrisError;

/// Main storage coordinator
pub struct Storage {
    paths: LibrisPaths,
    pub catalog: CatalogRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LibrisPaths) -> Result<Self, LibrisError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            catalog: CatalogRepository::new(paths.catalog_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LibrisPaths {
        &self.paths
    }

    /// Load all data from disk, seeding the catalog on first run
    pub fn load_all(&mut self) -> Result<(), LibrisError> {
        self.catalog.load()?;
        self.catalog.seed_if_empty()?;
        Ok(())
    }
}
