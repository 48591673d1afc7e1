use serde::{Deserialize, Serialize};
use std::fmt;

/// Circulation state of a single copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Issued => "issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry.
///
/// Title, author and isbn are fixed once the book exists; only the status
/// moves, and only through [`Book::issue`] and [`Book::return_book`].
/// The isbn is used as a lookup key but is not required to be unique.
///
/// Decoding is strict: all four fields must be present and `status` must be
/// one of `available` / `issued`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    status: BookStatus,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
        }
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = status;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Moves `available -> issued`. Returns `false` and leaves the book
    /// untouched if it is already issued.
    pub fn issue(&mut self) -> bool {
        if self.status != BookStatus::Available {
            return false;
        }
        self.status = BookStatus::Issued;
        true
    }

    /// Moves `issued -> available`. Returns `false` and leaves the book
    /// untouched if it was not issued.
    pub fn return_book(&mut self) -> bool {
        if self.status != BookStatus::Issued {
            return false;
        }
        self.status = BookStatus::Available;
        true
    }

    /// Case-insensitive substring match against the title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} | ISBN: {} | Status: {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}
