//! The interactive menu.
//!
//! Reads one choice per line, runs it to completion and prompts again until
//! the user exits or input ends. Errors from an individual action are printed
//! and logged; the loop carries on.

use super::render::{write_books, write_messages};
use shelf::api::{CmdResult, ShelfApi, StatusFilter};
use shelf::error::Result;
use shelf::store::CatalogStore;
use std::io::{BufRead, Write};

const MENU: &str = "\
===== Library Inventory Manager =====
1. Add Book
2. Issue Book
3. Return Book
4. View All Books
5. Search Book
6. Exit";

const MAX_CONSECUTIVE_FAILURES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Issue,
    Return,
    ViewAll,
    Search,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Issue),
            "3" => Some(Self::Return),
            "4" => Some(Self::ViewAll),
            "5" => Some(Self::Search),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub(super) fn run<S, R, W>(api: &mut ShelfApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let mut failures = 0;

    loop {
        writeln!(out, "\n{}", MENU)?;
        let flow = match prompt(input, out, "Enter your choice: ") {
            Ok(Some(line)) => match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => Ok(Flow::Exit),
                Some(choice) => run_choice(api, input, out, choice),
                None => {
                    writeln!(out, "Invalid choice. Please select 1-6.")?;
                    Ok(Flow::Continue)
                }
            },
            Ok(None) => {
                writeln!(out)?;
                Ok(Flow::Exit)
            }
            Err(e) => Err(e),
        };

        match flow {
            Ok(Flow::Continue) => failures = 0,
            Ok(Flow::Exit) => break,
            Err(e) => {
                writeln!(out, "Error occurred: {}", e)?;
                api.log_error(format!("Runtime error: {}", e));
                failures += 1;
                // Input that fails every read would otherwise spin forever.
                if failures >= MAX_CONSECUTIVE_FAILURES {
                    return Err(e);
                }
            }
        }
    }

    writeln!(out, "Exiting... Goodbye!")?;
    Ok(())
}

fn run_choice<S, R, W>(
    api: &mut ShelfApi<S>,
    input: &mut R,
    out: &mut W,
    choice: MenuChoice,
) -> Result<Flow>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let result = match choice {
        MenuChoice::Add => {
            let Some(title) = prompt(input, out, "Enter book title: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(author) = prompt(input, out, "Enter author name: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(isbn) = prompt(input, out, "Enter ISBN: ")? else {
                return Ok(Flow::Exit);
            };
            api.add_book(title, author, isbn)?
        }
        MenuChoice::Issue => {
            let Some(isbn) = prompt(input, out, "Enter ISBN to issue: ")? else {
                return Ok(Flow::Exit);
            };
            api.issue_book(&isbn)?
        }
        MenuChoice::Return => {
            let Some(isbn) = prompt(input, out, "Enter ISBN to return: ")? else {
                return Ok(Flow::Exit);
            };
            api.return_book(&isbn)?
        }
        MenuChoice::ViewAll => api.list_books(StatusFilter::All)?,
        MenuChoice::Search => {
            let Some(term) = prompt(input, out, "Enter title to search: ")? else {
                return Ok(Flow::Exit);
            };
            api.search_books(&term)?
        }
        MenuChoice::Exit => return Ok(Flow::Exit),
    };

    show(out, &result)?;
    Ok(Flow::Continue)
}

fn show<W: Write>(out: &mut W, result: &CmdResult) -> Result<()> {
    write_books(out, &result.listed_books)?;
    write_messages(out, &result.messages)?;
    Ok(())
}

/// Prints `label` and reads one line without its line ending.
/// `None` means input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::logging::Journal;
    use shelf::model::{Book, BookStatus};
    use shelf::store::memory::InMemoryStore;
    use std::cell::RefCell;
    use std::io::{self, Cursor};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_keys(
        api: &mut ShelfApi<InMemoryStore>,
        keys: impl AsRef<[u8]>,
    ) -> (Result<()>, String) {
        let mut input = Cursor::new(keys.as_ref().to_vec());
        let mut out = Vec::new();
        let result = run(api, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn session(store: InMemoryStore, keys: impl AsRef<[u8]>) -> (ShelfApi<InMemoryStore>, String) {
        let mut api = ShelfApi::open(store, Journal::disabled());
        let (result, out) = run_keys(&mut api, keys);
        result.unwrap();
        (api, out)
    }

    #[test]
    fn parses_menu_choices() {
        assert_eq!(MenuChoice::parse(" 4 \n"), Some(MenuChoice::ViewAll));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn exit_stops_the_loop() {
        let (_, out) = session(InMemoryStore::new(), "6\n4\n");
        assert_eq!(out.matches("Library Inventory Manager").count(), 1);
        assert!(out.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn end_of_input_exits() {
        let (_, out) = session(InMemoryStore::new(), "");
        assert!(out.contains("Enter your choice: "));
        assert!(out.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let (_, out) = session(InMemoryStore::new(), "9\n6\n");
        assert!(out.contains("Invalid choice. Please select 1-6."));
        assert_eq!(out.matches("Library Inventory Manager").count(), 2);
    }

    #[test]
    fn add_then_view() {
        let (api, out) = session(
            InMemoryStore::new(),
            "1\nDune\nFrank Herbert\n9780441013593\n4\n6\n",
        );
        assert!(out.contains("Book added successfully!"));
        assert!(out.contains("Dune by Frank Herbert | ISBN: 9780441013593 | Status: available"));
        assert_eq!(api.inventory().store().stored().unwrap().len(), 1);
    }

    #[test]
    fn view_on_empty_catalog() {
        let (_, out) = session(InMemoryStore::new(), "4\n6\n");
        assert!(out.contains("No books in catalog."));
    }

    #[test]
    fn issue_and_return_round_trip() {
        let store = InMemoryStore::with_books(vec![Book::new("Dune", "Frank Herbert", "1")]);
        let (api, out) = session(store, "2\n1\n2\n1\n3\n1\n3\n1\n6\n");

        assert!(out.contains("Book issued successfully!"));
        assert!(out.contains("Book not available"));
        assert!(out.contains("Book returned successfully!"));
        assert!(out.contains("Cannot return book"));
        assert_eq!(
            api.inventory().store().stored().unwrap()[0].status(),
            BookStatus::Available
        );
    }

    #[test]
    fn issuing_unknown_isbn_reports_not_found() {
        let (_, out) = session(InMemoryStore::new(), "2\n404\n6\n");
        assert!(out.contains("Book not found"));
    }

    #[test]
    fn search_lists_matches_or_says_none() {
        let store = InMemoryStore::with_books(vec![
            Book::new("War and Peace", "Leo Tolstoy", "1"),
            Book::new("Dune", "Frank Herbert", "2"),
        ]);
        let (_, out) = session(store, "5\nWAR\n5\nFoundation\n6\n");
        assert!(out.contains("War and Peace by Leo Tolstoy"));
        assert!(!out.contains("Dune by"));
        assert!(out.contains("No books found."));
    }

    #[test]
    fn input_ending_mid_action_exits_cleanly() {
        let (api, out) = session(InMemoryStore::new(), "1\nDune\n");
        assert!(out.ends_with("Exiting... Goodbye!\n"));
        assert!(api.inventory().is_empty());
    }

    #[test]
    fn save_failures_do_not_stop_the_loop() {
        let store = InMemoryStore::with_books(vec![]).failing_writes();
        let (api, out) = session(store, "1\nDune\nFrank Herbert\n1\n4\n6\n");
        assert!(out.contains("could not be saved"));
        assert!(out.contains("Dune by Frank Herbert"));
        assert_eq!(api.inventory().len(), 1);
    }

    #[test]
    fn unreadable_choice_is_reported_and_the_loop_goes_on() {
        let (_, out) = session(InMemoryStore::new(), b"\xff\n4\n6\n");
        assert!(out.contains("Error occurred: IO error"));
        assert!(out.contains("No books in catalog."));
        assert!(out.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn action_errors_are_printed_and_journaled() {
        let log = SharedBuf::default();
        let journal = Journal::from_writer(log.clone(), log::LevelFilter::Info);
        let mut api = ShelfApi::open(InMemoryStore::new(), journal);

        let (result, out) = run_keys(&mut api, b"1\n\xff\n6\n");

        assert!(result.is_ok());
        assert!(out.contains("Error occurred: IO error"));
        assert!(out.ends_with("Exiting... Goodbye!\n"));
        assert!(api.inventory().is_empty());
        assert!(log.text().contains("ERROR - Runtime error: IO error"));
    }

    #[test]
    fn input_that_keeps_failing_ends_the_loop() {
        let mut api = ShelfApi::open(InMemoryStore::new(), Journal::disabled());
        let (result, out) = run_keys(&mut api, b"\xff\n\xff\n\xff\n6\n");
        assert!(result.is_err());
        assert_eq!(out.matches("Error occurred:").count(), 3);
    }

    #[test]
    fn added_fields_keep_their_spacing() {
        let (api, _) = session(InMemoryStore::new(), "1\n  Dune \nFrank Herbert\r\n 1\n6\n");
        let book = &api.inventory().list_all()[0];
        assert_eq!(book.title(), "  Dune ");
        assert_eq!(book.author(), "Frank Herbert");
        assert_eq!(book.isbn(), " 1");
    }
}
