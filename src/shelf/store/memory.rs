use super::CatalogStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Option<Vec<Book>>,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a catalog.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Some(books),
            ..Self::default()
        }
    }

    /// Every `save` returns an error; whatever was stored before stays.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// The catalog as last saved, if any.
    pub fn stored(&self) -> Option<&[Book]> {
        self.books.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl CatalogStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.books.is_some()
    }

    fn load(&self) -> Result<Vec<Book>> {
        self.books
            .clone()
            .ok_or_else(|| ShelfError::Store("No catalog in memory".to_string()))
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_writes {
            return Err(ShelfError::Store("Writes are disabled".to_string()));
        }
        self.books = Some(books.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookStatus;

    pub struct StoreFixture {
        books: Vec<Book>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { books: Vec::new() }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            let start = self.books.len();
            for i in 0..count {
                let n = start + i + 1;
                self.books.push(Book::new(
                    format!("Test Book {}", n),
                    format!("Author {}", n),
                    format!("isbn-{}", n),
                ));
            }
            self
        }

        pub fn with_available_book(mut self, title: &str, isbn: &str) -> Self {
            self.books.push(Book::new(title, "Some Author", isbn));
            self
        }

        pub fn with_issued_book(mut self, title: &str, isbn: &str) -> Self {
            self.books
                .push(Book::new(title, "Some Author", isbn).with_status(BookStatus::Issued));
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_books(self.books)
        }
    }
}
