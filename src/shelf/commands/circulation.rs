//! Issuing and returning books by isbn.
//!
//! The first book carrying the isbn is the one acted on. A miss, or a book
//! already in the target state, is reported as an error message and nothing
//! is saved.

use crate::commands::{save_warning, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Book;
use crate::store::CatalogStore;

#[derive(Debug, Clone, Copy)]
enum Transition {
    Issue,
    Return,
}

impl Transition {
    fn apply(self, book: &mut Book) -> bool {
        match self {
            Transition::Issue => book.issue(),
            Transition::Return => book.return_book(),
        }
    }

    fn action(self) -> &'static str {
        match self {
            Transition::Issue => "Book issued",
            Transition::Return => "Book returned",
        }
    }

    fn done(self) -> &'static str {
        match self {
            Transition::Issue => "Book issued successfully!",
            Transition::Return => "Book returned successfully!",
        }
    }

    fn refused(self, book: &Book) -> String {
        match self {
            Transition::Issue => format!("Book not available: {} is already issued", book.title()),
            Transition::Return => format!("Cannot return book: {} is not issued", book.title()),
        }
    }
}

pub fn issue<S: CatalogStore>(inventory: &mut Inventory<S>, isbn: &str) -> Result<CmdResult> {
    transition(inventory, isbn, Transition::Issue)
}

pub fn return_book<S: CatalogStore>(
    inventory: &mut Inventory<S>,
    isbn: &str,
) -> Result<CmdResult> {
    transition(inventory, isbn, Transition::Return)
}

fn transition<S: CatalogStore>(
    inventory: &mut Inventory<S>,
    isbn: &str,
    transition: Transition,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(book) = inventory.find_mut(isbn) else {
        result.add_message(CmdMessage::error(format!(
            "Book not found: no book with ISBN {}",
            isbn
        )));
        return Ok(result);
    };

    if !transition.apply(book) {
        let message = transition.refused(book);
        result.add_message(CmdMessage::error(message));
        return Ok(result);
    }
    let book = book.clone();

    match inventory.save() {
        Ok(()) => result.add_message(CmdMessage::success(transition.done())),
        Err(e) => result.add_message(save_warning(transition.action(), &e)),
    }
    result.affected_books.push(book);

    Ok(result)
}
