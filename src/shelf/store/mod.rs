//! # Storage Layer
//!
//! The [`CatalogStore`] trait is the seam between the inventory and wherever
//! the catalog actually lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole catalog is one JSON array in a single file (`catalog.json`
//!     by default)
//!   - Every save rewrites the file in full
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail writes, to exercise the save-failure path
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "title": "Dune",
//!         "author": "Frank Herbert",
//!         "isbn": "9780441013593",
//!         "status": "available"
//!     }
//! ]
//! ```
//!
//! Stores only move whole catalogs. Deciding what to do when a load or save
//! fails is the inventory's job, not the store's.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait CatalogStore {
    /// Whether a catalog has been persisted yet
    fn exists(&self) -> bool;

    /// Read the full catalog, in stored order
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the stored catalog with `books`
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Human readable location, for logs and messages
    fn location(&self) -> String;
}
