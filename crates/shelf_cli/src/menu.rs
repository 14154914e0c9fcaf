//! Interactive text menu over one catalog.
//!
//! # Responsibility
//! - Prompt for raw field values and hand them to `CatalogService`.
//! - Render results and recoverable errors, then return to the main menu.
//!
//! # Invariants
//! - Validation and choice errors never end the session.
//! - End of input ends the session cleanly.
//! - The menu never mutates records except through service calls.

use crate::render::book_details;
use log::{debug, warn};
use shelf_core::{
    normalize_availability, require_non_empty, BookDraft, BookPatch, CatalogService,
    ValidationError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const MAIN_MENU: &str = "\n===== Library Management System =====
1. Add Book
2. View All Books
3. Search Books
4. Update Book
5. Delete Book
6. Exit";

const UPDATE_MENU: &str = "\nUpdate Options:
1. Title
2. Author
3. Genre
4. Availability
5. Cancel";

/// Menu session failure.
#[derive(Debug)]
pub enum MenuError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// Catalog rejected the request.
    Validation(ValidationError),
    /// Unknown sub-menu selection.
    InvalidChoice(String),
    /// Input reached end of stream mid-dialog.
    InputClosed,
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal I/O failed: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidChoice(message) => write!(f, "{message}"),
            Self::InputClosed => write!(f, "input closed"),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ValidationError> for MenuError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

type MenuResult<T> = Result<T, MenuError>;

/// One interactive session bound to an input and an output stream.
pub struct Menu<I: BufRead, O: Write> {
    catalog: CatalogService,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Menu<I, O> {
    pub fn new(catalog: CatalogService, input: I, output: O) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Read-only view of the catalog driven by this session.
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Runs the main loop until the user exits or input ends.
    ///
    /// # Errors
    /// Only I/O failures are returned; everything else is shown and the loop
    /// continues.
    pub fn run(&mut self) -> MenuResult<()> {
        loop {
            writeln!(self.output, "{MAIN_MENU}")?;
            let choice = match self.prompt("Enter your choice: ") {
                Ok(choice) => choice,
                Err(MenuError::InputClosed) => return Ok(()),
                Err(err) => return Err(err),
            };
            debug!("event=menu_choice module=cli choice={choice}");

            let outcome = match choice.as_str() {
                "1" => self.add_book(),
                "2" => self.view_all_books(),
                "3" => self.search_books(),
                "4" => self.update_book(),
                "5" => self.delete_book(),
                "6" => {
                    writeln!(self.output, "Exiting system...")?;
                    return Ok(());
                }
                _ => Err(MenuError::InvalidChoice(
                    "Invalid choice. Please enter 1-6.".to_string(),
                )),
            };

            match outcome {
                Ok(()) => {}
                Err(MenuError::Validation(err)) => {
                    warn!(
                        "event=menu_action module=cli status=error error_code={}",
                        err.code()
                    );
                    writeln!(self.output, "Error: {err}")?;
                }
                Err(MenuError::InvalidChoice(message)) => writeln!(self.output, "{message}")?,
                Err(MenuError::InputClosed) => return Ok(()),
                Err(err) => return Err(err),
            }
        }
    }

    fn add_book(&mut self) -> MenuResult<()> {
        writeln!(self.output, "\n=== Add New Book ===")?;
        let id = self.prompt_required("Enter Book ID: ", "Book ID")?;
        let title = self.prompt_required("Enter Title: ", "Title")?;
        let author = self.prompt_required("Enter Author: ", "Author")?;
        let genre = self.prompt("Enter Genre: ")?;
        let availability = self.prompt_availability()?;

        self.catalog
            .add(BookDraft::new(id, title, author, genre, availability))?;
        writeln!(self.output, "\nBook added successfully!")?;
        Ok(())
    }

    fn view_all_books(&mut self) -> MenuResult<()> {
        writeln!(self.output, "\n=== All Books ===")?;
        let books = self.catalog.list();
        if books.is_empty() {
            writeln!(self.output, "No books available in the library.")?;
            return Ok(());
        }
        for book in books {
            write!(self.output, "{}", book_details(book))?;
        }
        Ok(())
    }

    fn search_books(&mut self) -> MenuResult<()> {
        writeln!(self.output, "\n=== Search Books ===")?;
        writeln!(self.output, "1. Search by ID\n2. Search by Title")?;
        match self.prompt("Enter your choice (1/2): ")?.as_str() {
            "1" => self.search_by_id(),
            "2" => self.search_by_title(),
            _ => Err(MenuError::InvalidChoice("Invalid search option.".to_string())),
        }
    }

    fn search_by_id(&mut self) -> MenuResult<()> {
        let id = self.prompt("Enter Book ID: ")?;
        match self.catalog.find_by_id(&id) {
            Some(book) => write!(self.output, "\nBook found:\n{}", book_details(book))?,
            None => writeln!(self.output, "No book found with ID: {id}")?,
        }
        Ok(())
    }

    fn search_by_title(&mut self) -> MenuResult<()> {
        let term = self.prompt("Enter Title: ")?;
        let hits = self.catalog.search_by_title(&term);
        if hits.is_empty() {
            writeln!(self.output, "No books found matching: {term}")?;
            return Ok(());
        }
        writeln!(self.output, "\nFound {} book(s):", hits.len())?;
        for book in hits {
            write!(self.output, "{}", book_details(book))?;
        }
        Ok(())
    }

    fn update_book(&mut self) -> MenuResult<()> {
        writeln!(self.output, "\n=== Update Book ===")?;
        let id = self.prompt("Enter Book ID to update: ")?;
        let Some(book) = self.catalog.find_by_id(&id) else {
            writeln!(self.output, "Book not found.")?;
            return Ok(());
        };
        write!(self.output, "\nCurrent details:\n{}", book_details(book))?;

        writeln!(self.output, "{UPDATE_MENU}")?;
        let patch = match self.prompt("Select field to update (1-5): ")?.as_str() {
            "1" => BookPatch::default().title(self.prompt_required("New Title: ", "Title")?),
            "2" => BookPatch::default().author(self.prompt_required("New Author: ", "Author")?),
            "3" => BookPatch::default().genre(self.prompt("New Genre: ")?),
            "4" => BookPatch::default().availability(self.prompt_availability()?),
            "5" => {
                writeln!(self.output, "Update cancelled.")?;
                return Ok(());
            }
            _ => {
                return Err(MenuError::InvalidChoice(
                    "Error: Invalid update choice".to_string(),
                ))
            }
        };

        self.catalog.update(&id, patch)?;
        writeln!(self.output, "Book updated successfully!")?;
        Ok(())
    }

    fn delete_book(&mut self) -> MenuResult<()> {
        writeln!(self.output, "\n=== Delete Book ===")?;
        let id = self.prompt("Enter Book ID to delete: ")?;
        if self.catalog.delete(&id) {
            writeln!(self.output, "Book deleted successfully.")?;
        } else {
            writeln!(self.output, "Book not found.")?;
        }
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line.
    fn prompt(&mut self, prompt: &str) -> MenuResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_required(&mut self, prompt: &str, field: &'static str) -> MenuResult<String> {
        let value = self.prompt(prompt)?;
        require_non_empty(Some(value.as_str()), field)?;
        Ok(value)
    }

    /// Re-prompts until the value normalizes; returns the canonical label.
    fn prompt_availability(&mut self) -> MenuResult<String> {
        loop {
            let raw = self.prompt("Availability (Available/Checked Out): ")?;
            match normalize_availability(&raw) {
                Ok(availability) => return Ok(availability.as_str().to_string()),
                Err(err) => writeln!(self.output, "Error: {err}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Menu;
    use shelf_core::{Availability, CatalogService};
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, CatalogService) {
        let mut output = Vec::new();
        let catalog = {
            let mut menu = Menu::new(
                CatalogService::in_memory(),
                Cursor::new(script.as_bytes().to_vec()),
                &mut output,
            );
            menu.run().unwrap();
            menu.catalog
        };
        (String::from_utf8(output).unwrap(), catalog)
    }

    const ADD_CLEAN_CODE: &str = "1\n001\nClean Code\nRobert Martin\nProgramming\nAvailable\n";

    #[test]
    fn add_then_list_shows_details() {
        let script = format!("{ADD_CLEAN_CODE}2\n6\n");
        let (out, catalog) = run_script(&script);

        assert!(out.contains("Book added successfully!"));
        assert!(out.contains("Title          : Clean Code"));
        assert!(out.contains("Exiting system..."));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn availability_is_reprompted_until_valid() {
        let (out, catalog) = run_script("1\n001\nDune\nFrank Herbert\n\nlost\nchecked out\n6\n");

        assert!(out.contains("Error: Invalid availability status: `lost`"));
        let book = catalog.find_by_id("001").unwrap();
        assert_eq!(book.availability, Availability::CheckedOut);
        assert_eq!(book.genre, "");
    }

    #[test]
    fn blank_required_field_aborts_add_and_loop_continues() {
        let (out, catalog) = run_script("1\n001\n   \n2\n6\n");

        assert!(out.contains("Error: Title cannot be empty"));
        assert!(out.contains("No books available in the library."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn duplicate_id_is_reported() {
        let script = format!("{ADD_CLEAN_CODE}1\n001\nOther\nSomeone\n\navailable\n6\n");
        let (out, catalog) = run_script(&script);

        assert!(out.contains("Error: Book ID already exists: 001"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn search_by_id_and_title() {
        let script = format!("{ADD_CLEAN_CODE}3\n1\n001\n3\n1\n404\n3\n2\nan co\n3\n2\nrust\n3\n9\n6\n");
        let (out, _) = run_script(&script);

        assert!(out.contains("Book found:"));
        assert!(out.contains("No book found with ID: 404"));
        assert!(out.contains("Found 1 book(s):"));
        assert!(out.contains("No books found matching: rust"));
        assert!(out.contains("Invalid search option."));
    }

    #[test]
    fn update_single_field_and_cancel() {
        let script = format!("{ADD_CLEAN_CODE}4\n001\n4\nCHECKED OUT\n4\n001\n5\n4\n404\n6\n");
        let (out, catalog) = run_script(&script);

        assert!(out.contains("Current details:"));
        assert!(out.contains("Book updated successfully!"));
        assert!(out.contains("Update cancelled."));
        assert!(out.contains("Book not found."));
        let book = catalog.find_by_id("001").unwrap();
        assert_eq!(book.availability.as_str(), "Checked out");
        assert_eq!(book.title, "Clean Code");
    }

    #[test]
    fn invalid_update_choice_is_reported() {
        let script = format!("{ADD_CLEAN_CODE}4\n001\n7\n6\n");
        let (out, catalog) = run_script(&script);

        assert!(out.contains("Error: Invalid update choice"));
        assert_eq!(catalog.find_by_id("001").unwrap().genre, "Programming");
    }

    #[test]
    fn delete_reports_found_and_missing() {
        let script = format!("{ADD_CLEAN_CODE}5\n001\n5\n001\n6\n");
        let (out, catalog) = run_script(&script);

        assert!(out.contains("Book deleted successfully."));
        assert!(out.contains("Book not found."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn unknown_choice_and_end_of_input_end_cleanly() {
        let (out, _) = run_script("9\n1\n001\n");

        assert!(out.contains("Invalid choice. Please enter 1-6."));
        assert!(!out.contains("Exiting system..."));
    }
}
