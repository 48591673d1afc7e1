use colored::{ColoredString, Colorize};
use shelf::api::{CmdMessage, MessageLevel};
use shelf::model::{Book, BookStatus};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 36;
const AUTHOR_WIDTH: usize = 24;

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        writeln!(out, "{}", colorize(message))?;
    }
    Ok(())
}

fn colorize(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

/// One book per line, in its plain string form.
pub(super) fn write_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        writeln!(out, "{}", book)?;
    }
    Ok(())
}

/// Column-aligned listing for one-shot commands.
pub(super) fn write_book_table<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    let idx_width = books.len().to_string().len();

    for (i, book) in books.iter().enumerate() {
        let idx = format!("{:>width$}. ", i + 1, width = idx_width);
        let title = pad_to_width(&truncate_to_width(book.title(), TITLE_WIDTH), TITLE_WIDTH);
        let author = pad_to_width(&truncate_to_width(book.author(), AUTHOR_WIDTH), AUTHOR_WIDTH);
        let status = match book.status() {
            BookStatus::Available => book.status().as_str().green(),
            BookStatus::Issued => book.status().as_str().yellow(),
        };

        writeln!(
            out,
            "{}{}  {}  {}  {}",
            idx.dimmed(),
            title.bold(),
            author,
            book.isbn(),
            status
        )?;
    }
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
