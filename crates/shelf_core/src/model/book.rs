//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical record stored by the catalog.
//! - Define draft/patch request shapes consumed by `CatalogService`.
//!
//! # Invariants
//! - `id` is immutable once a `Book` exists; there is no setter for it.
//! - `title` and `author` are non-blank for every `Book` built by the catalog.
//! - `availability` is one of the two canonical values.

use crate::validator::{require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Circulation state of a book.
///
/// Canonical labels keep only the first letter upper-cased, so the second
/// variant renders as `Checked out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// On the shelf.
    #[serde(rename = "Available")]
    Available,
    /// Lent out.
    #[serde(rename = "Checked out")]
    CheckedOut,
}

impl Availability {
    /// Returns the canonical stored label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::CheckedOut => "Checked out",
        }
    }
}

impl Display for Availability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical catalog record.
///
/// Fields are readable by anyone holding a reference, but the catalog only
/// hands out shared borrows, so stored records change through
/// `CatalogService::update` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookWire")]
pub struct Book {
    id: String,
    pub title: String,
    pub author: String,
    /// Free text; empty when not provided.
    pub genre: String,
    pub availability: Availability,
}

impl Book {
    /// Builds a record from already validated parts.
    ///
    /// Used by the catalog after validation; does not check field contents.
    pub(crate) fn from_parts(
        id: String,
        title: String,
        author: String,
        genre: String,
        availability: Availability,
    ) -> Self {
        Self {
            id,
            title,
            author,
            genre,
            availability,
        }
    }

    /// Stable record identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Checks the required-field invariants of a stored record.
    ///
    /// Repository writes call this before touching storage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(Some(self.id.as_str()), "Book ID")?;
        require_non_empty(Some(self.title.as_str()), "Title")?;
        require_non_empty(Some(self.author.as_str()), "Author")?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct BookWire {
    id: String,
    title: String,
    author: String,
    #[serde(default)]
    genre: String,
    availability: Availability,
}

impl TryFrom<BookWire> for Book {
    type Error = ValidationError;

    fn try_from(value: BookWire) -> Result<Self, Self::Error> {
        let book = Self::from_parts(
            value.id,
            value.title,
            value.author,
            value.genre,
            value.availability,
        );
        book.validate()?;
        Ok(book)
    }
}

/// Raw, unvalidated input for adding one book.
///
/// `None` and blank values are both rejected for required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    /// Free-form availability text, normalized on insert.
    pub availability: Option<String>,
}

impl BookDraft {
    /// Creates a draft with every field supplied.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        availability: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
            author: Some(author.into()),
            genre: Some(genre.into()),
            availability: Some(availability.into()),
        }
    }
}

/// Partial update for one book.
///
/// `None` leaves the field untouched. `Some` replaces it; for `genre` an empty
/// string clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub availability: Option<String>,
}

impl BookPatch {
    /// Returns whether the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre.is_none()
            && self.availability.is_none()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }
}
