use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::CatalogStore;

/// Title substring search, case-insensitive, in stored order.
pub fn by_title<S: CatalogStore>(inventory: &Inventory<S>, term: &str) -> Result<CmdResult> {
    let listed: Vec<_> = inventory
        .search_by_title(term)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result.with_listed_books(listed))
}

/// Exact isbn lookup; lists at most one book.
pub fn by_isbn<S: CatalogStore>(inventory: &Inventory<S>, isbn: &str) -> Result<CmdResult> {
    let result = match inventory.search_by_isbn(isbn) {
        Some(book) => CmdResult::default().with_listed_books(vec![book.clone()]),
        None => CmdResult::default().with_message(CmdMessage::error(format!(
            "Book not found: no book with ISBN {}",
            isbn
        ))),
    };
    Ok(result)
}
