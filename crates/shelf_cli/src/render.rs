//! Plain-text rendering of catalog records.

use shelf_core::Book;

const LABEL_WIDTH: usize = 15;
const SEPARATOR_WIDTH: usize = 30;

/// Renders one book as aligned `Label: value` lines plus a separator.
pub fn book_details(book: &Book) -> String {
    let rows = [
        ("ID", book.id()),
        ("Title", book.title.as_str()),
        ("Author", book.author.as_str()),
        ("Genre", book.genre.as_str()),
        ("Availability", book.availability.as_str()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{label:<LABEL_WIDTH$}: {value}\n"));
    }
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out
}
