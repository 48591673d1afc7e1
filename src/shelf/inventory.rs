//! # Inventory
//!
//! [`Inventory`] owns the in-memory catalog for the life of the process,
//! together with the store it persists to and the journal it logs to.
//!
//! ## Persistence policy
//!
//! - Loading never fails. A missing catalog is a first run: the inventory
//!   starts empty and immediately writes an empty catalog. An unreadable or
//!   malformed catalog is logged and the inventory starts empty.
//! - Every save rewrites the full catalog. Failures are logged and handed
//!   back to the caller, which decides how to report them; the in-memory
//!   state is kept either way.
//! - [`Inventory::add`] saves on its own. Issue and return go through
//!   [`Inventory::find_mut`], after which the caller must call
//!   [`Inventory::save`] itself.

use crate::error::Result;
use crate::logging::Journal;
use crate::model::Book;
use crate::store::CatalogStore;

/// What [`Inventory::load`] found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing catalog was read.
    Loaded(usize),
    /// No catalog existed; an empty one was created.
    Initialized,
    /// The catalog could not be read; starting empty.
    Recovered(String),
}

pub struct Inventory<S: CatalogStore> {
    store: S,
    books: Vec<Book>,
    journal: Journal,
}

impl<S: CatalogStore> Inventory<S> {
    /// Builds an inventory and loads it from `store`.
    pub fn open(store: S, journal: Journal) -> (Self, LoadOutcome) {
        let mut inventory = Self {
            store,
            books: Vec::new(),
            journal,
        };
        let outcome = inventory.load();
        (inventory, outcome)
    }

    /// Replaces the in-memory catalog with whatever the store holds.
    pub fn load(&mut self) -> LoadOutcome {
        if !self.store.exists() {
            self.books.clear();
            // A failed first write is already in the journal.
            let _ = self.save();
            return LoadOutcome::Initialized;
        }

        match self.store.load() {
            Ok(books) => {
                self.books = books;
                self.journal.info("Catalog loaded successfully.");
                LoadOutcome::Loaded(self.books.len())
            }
            Err(e) => {
                self.journal.error(format!("Error loading catalog: {}", e));
                self.books.clear();
                LoadOutcome::Recovered(e.to_string())
            }
        }
    }

    /// Writes the full catalog to the store.
    pub fn save(&mut self) -> Result<()> {
        match self.store.save(&self.books) {
            Ok(()) => {
                self.journal.info("Catalog saved.");
                Ok(())
            }
            Err(e) => {
                self.journal.error(format!("Could not save catalog: {}", e));
                Err(e)
            }
        }
    }

    /// Appends `book` and saves. The book stays in memory even if the save fails.
    pub fn add(&mut self, book: Book) -> Result<()> {
        self.books.push(book);
        self.save()
    }

    /// All books whose title contains `needle`, ignoring case, in stored order.
    pub fn search_by_title(&self, needle: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.title_contains(needle))
            .collect()
    }

    /// First book with exactly this isbn.
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    /// Mutable access to the first book with exactly this isbn.
    ///
    /// Changes made through the returned reference are not persisted until
    /// [`Inventory::save`] is called.
    pub fn find_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.isbn() == isbn)
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn journal_mut(&mut self) -> &mut Journal {
        &mut self.journal
    }

    /// Closes the journal. The catalog itself is already on disk.
    pub fn close(self) -> Result<()> {
        self.journal.close()
    }
}
