//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for shelf operations, whatever UI drives them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Inventory`] for the life of the process
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic and no presentation: lookups, transitions and
//! persistence policy live in `commands/*.rs` and [`Inventory`]; turning a
//! `CmdResult` into text is the UI's job.
//!
//! ## Generic Over CatalogStore
//!
//! `ShelfApi<S: CatalogStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::inventory::{Inventory, LoadOutcome};
use crate::logging::Journal;
use crate::store::CatalogStore;

pub struct ShelfApi<S: CatalogStore> {
    inventory: Inventory<S>,
    load_outcome: LoadOutcome,
}

impl<S: CatalogStore> ShelfApi<S> {
    /// Opens the catalog behind `store`, logging to `journal`.
    pub fn open(store: S, journal: Journal) -> Self {
        let (inventory, load_outcome) = Inventory::open(store, journal);
        Self {
            inventory,
            load_outcome,
        }
    }

    /// How the catalog was obtained at startup.
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        isbn: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, title, author, isbn)
    }

    pub fn issue_book(&mut self, isbn: &str) -> Result<commands::CmdResult> {
        commands::circulation::issue(&mut self.inventory, isbn)
    }

    pub fn return_book(&mut self, isbn: &str) -> Result<commands::CmdResult> {
        commands::circulation::return_book(&mut self.inventory, isbn)
    }

    pub fn list_books(&self, filter: StatusFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory, filter)
    }

    pub fn search_books(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::by_title(&self.inventory, term)
    }

    pub fn find_book(&self, isbn: &str) -> Result<commands::CmdResult> {
        commands::search::by_isbn(&self.inventory, isbn)
    }

    /// Records an error raised outside the command layer (e.g. by the UI).
    pub fn log_error(&mut self, message: impl std::fmt::Display) {
        self.inventory.journal_mut().error(message);
    }

    pub fn inventory(&self) -> &Inventory<S> {
        &self.inventory
    }

    /// Flushes and closes the journal.
    pub fn close(self) -> Result<()> {
        self.inventory.close()
    }
}

pub use commands::list::StatusFilter;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
