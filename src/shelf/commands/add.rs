use crate::commands::{save_warning, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Book;
use crate::store::CatalogStore;

/// Adds a new, available book. No duplicate check is made on the isbn.
pub fn run<S: CatalogStore>(
    inventory: &mut Inventory<S>,
    title: String,
    author: String,
    isbn: String,
) -> Result<CmdResult> {
    let book = Book::new(title, author, isbn);
    let mut result = CmdResult::default().with_affected_books(vec![book.clone()]);

    match inventory.add(book) {
        Ok(()) => result.add_message(CmdMessage::success("Book added successfully!")),
        Err(e) => result.add_message(save_warning("Book added", &e)),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::logging::Journal;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_an_available_book() {
        let (mut inventory, _) = Inventory::open(InMemoryStore::new(), Journal::disabled());

        let result = run(&mut inventory, "Dune".into(), "Frank Herbert".into(), "1".into()).unwrap();

        assert!(result.has_level(MessageLevel::Success));
        assert_eq!(result.affected_books.len(), 1);
        assert!(inventory.list_all()[0].is_available());
        assert_eq!(inventory.store().stored().unwrap().len(), 1);
    }

    #[test]
    fn accepts_empty_fields() {
        let (mut inventory, _) = Inventory::open(InMemoryStore::new(), Journal::disabled());
        let result = run(&mut inventory, "".into(), "".into(), "".into()).unwrap();
        assert!(result.has_level(MessageLevel::Success));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn warns_when_save_fails() {
        let store = InMemoryStore::with_books(vec![]).failing_writes();
        let (mut inventory, _) = Inventory::open(store, Journal::disabled());

        let result = run(&mut inventory, "Dune".into(), "Frank Herbert".into(), "1".into()).unwrap();

        assert!(result.has_level(MessageLevel::Warning));
        assert!(!result.has_level(MessageLevel::Success));
        assert_eq!(inventory.len(), 1);
    }
}
