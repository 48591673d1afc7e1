use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{Book, BookStatus};
use crate::store::CatalogStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookStatus),
}

impl StatusFilter {
    fn matches(&self, book: &Book) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => book.status() == *status,
        }
    }
}

pub fn run<S: CatalogStore>(inventory: &Inventory<S>, filter: StatusFilter) -> Result<CmdResult> {
    let listed: Vec<Book> = inventory
        .list_all()
        .iter()
        .filter(|book| filter.matches(book))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let message = match filter {
            StatusFilter::All => "No books in catalog.".to_string(),
            StatusFilter::Only(status) => format!("No {} books.", status),
        };
        result.add_message(CmdMessage::info(message));
    }

    Ok(result.with_listed_books(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Journal;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn inventory(store: InMemoryStore) -> Inventory<InMemoryStore> {
        Inventory::open(store, Journal::disabled()).0
    }

    #[test]
    fn lists_everything_in_stored_order() {
        let inv = inventory(
            StoreFixture::new()
                .with_issued_book("B", "2")
                .with_available_book("A", "1")
                .build(),
        );

        let result = run(&inv, StatusFilter::All).unwrap();

        let titles: Vec<_> = result.listed_books.iter().map(Book::title).collect();
        assert_eq!(titles, ["B", "A"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn lists_every_book() {
        let inv = inventory(StoreFixture::new().with_books(3).build());
        let result = run(&inv, StatusFilter::All).unwrap();
        let isbns: Vec<_> = result.listed_books.iter().map(Book::isbn).collect();
        assert_eq!(isbns, ["isbn-1", "isbn-2", "isbn-3"]);
    }

    #[test]
    fn empty_catalog_says_so() {
        let inv = inventory(InMemoryStore::new());
        let result = run(&inv, StatusFilter::All).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No books in catalog.");
    }

    #[test]
    fn filters_by_status() {
        let inv = inventory(
            StoreFixture::new()
                .with_issued_book("B", "2")
                .with_available_book("A", "1")
                .build(),
        );

        let issued = run(&inv, StatusFilter::Only(BookStatus::Issued)).unwrap();
        assert_eq!(issued.listed_books.len(), 1);
        assert_eq!(issued.listed_books[0].title(), "B");

        let inv = inventory(StoreFixture::new().with_issued_book("B", "2").build());
        let available = run(&inv, StatusFilter::Only(BookStatus::Available)).unwrap();
        assert_eq!(available.messages[0].content, "No available books.");
    }
}
