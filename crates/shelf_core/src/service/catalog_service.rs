//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide add/list/find/search/update/delete entry points for callers.
//! - Enforce record invariants before any repository write.
//!
//! # Invariants
//! - A failed `add` or `update` leaves the catalog unchanged.
//! - `update` validates every supplied field before applying any of them.
//! - `id` is never rewritten after insertion.
//! - Read APIs hand out shared borrows only.

use crate::model::book::{Availability, Book, BookDraft, BookPatch};
use crate::repo::book_repo::{BookRepository, InMemoryBookRepository};
use crate::validator::{
    normalize_availability, require_non_empty, require_unique_id, ValidationError,
};
use log::{debug, info, warn};

/// Use-case service owning one catalog's record storage.
pub struct CatalogService<R: BookRepository = InMemoryBookRepository> {
    repo: R,
}

impl CatalogService<InMemoryBookRepository> {
    /// Creates a service over an empty in-memory catalog.
    pub fn in_memory() -> Self {
        Self::new(InMemoryBookRepository::new())
    }
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates a draft and appends it as a new book.
    ///
    /// # Contract
    /// - Checks `id`, `title`, `author` presence, then id uniqueness, then
    ///   availability; the first failure is returned.
    /// - Stored availability is the normalized value.
    /// - Returns the stored record.
    pub fn add(&mut self, draft: BookDraft) -> Result<&Book, ValidationError> {
        let id = match self.store_draft(draft) {
            Ok(id) => id,
            Err(err) => {
                warn!(
                    "event=catalog_add module=catalog status=error error_code={} size={}",
                    err.code(),
                    self.repo.len()
                );
                return Err(err);
            }
        };

        info!(
            "event=catalog_add module=catalog status=ok book_id={} size={}",
            id,
            self.repo.len()
        );
        self.repo
            .get(&id)
            .ok_or_else(|| ValidationError::BookNotFound(id.clone()))
    }

    /// Returns every book in insertion order.
    pub fn list(&self) -> &[Book] {
        self.repo.books()
    }

    /// Finds a book by exact id.
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.repo.get(id)
    }

    /// Case-insensitive substring search over titles.
    ///
    /// Matches keep insertion order. No match is an empty result.
    pub fn search_by_title(&self, term: &str) -> Vec<&Book> {
        let needle = term.to_lowercase();
        let hits: Vec<&Book> = self
            .repo
            .books()
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect();
        debug!(
            "event=catalog_search module=catalog status=ok field=title hits={}",
            hits.len()
        );
        hits
    }

    /// Applies a partial update to an existing book.
    ///
    /// # Contract
    /// - Unknown `id` fails with `BookNotFound`.
    /// - A patch naming no field fails with `EmptyPatch`.
    /// - All supplied fields are validated first; nothing is applied unless
    ///   every one passes.
    /// - `genre` is applied verbatim.
    pub fn update(&mut self, id: &str, patch: BookPatch) -> Result<&Book, ValidationError> {
        let fields = match self.apply_patch(id, patch) {
            Ok(fields) => fields,
            Err(err) => {
                warn!(
                    "event=catalog_update module=catalog status=error book_id={} error_code={}",
                    id,
                    err.code()
                );
                return Err(err);
            }
        };

        info!(
            "event=catalog_update module=catalog status=ok book_id={} fields={}",
            id,
            fields.join(",")
        );
        self.repo
            .get(id)
            .ok_or_else(|| ValidationError::BookNotFound(id.to_string()))
    }

    /// Removes the book with this id.
    ///
    /// Returns `false` when nothing matched; that is not an error.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.repo.remove(id);
        info!(
            "event=catalog_delete module=catalog status=ok book_id={} removed={} size={}",
            id,
            removed,
            self.repo.len()
        );
        removed
    }

    /// Number of stored books.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    fn store_draft(&mut self, draft: BookDraft) -> Result<String, ValidationError> {
        let book = self.build_book(draft)?;
        let id = book.id().to_string();
        self.repo.insert(book)?;
        Ok(id)
    }

    fn apply_patch(
        &mut self,
        id: &str,
        patch: BookPatch,
    ) -> Result<Vec<&'static str>, ValidationError> {
        let changes = self.check_patch(id, patch)?;
        let mut book = self
            .repo
            .get(id)
            .cloned()
            .ok_or_else(|| ValidationError::BookNotFound(id.to_string()))?;
        let fields = changes.apply_to(&mut book);
        self.repo.update(book)?;
        Ok(fields)
    }

    fn build_book(&self, draft: BookDraft) -> Result<Book, ValidationError> {
        let id = take_required(draft.id, "Book ID")?;
        let title = take_required(draft.title, "Title")?;
        let author = take_required(draft.author, "Author")?;
        require_unique_id(&id, self.repo.books())?;
        let availability = match draft.availability {
            Some(raw) => normalize_availability(&raw)?,
            None => {
                return Err(ValidationError::EmptyField {
                    field: "Availability",
                })
            }
        };

        Ok(Book::from_parts(
            id,
            title,
            author,
            draft.genre.unwrap_or_default(),
            availability,
        ))
    }

    fn check_patch(&self, id: &str, patch: BookPatch) -> Result<CheckedPatch, ValidationError> {
        if self.repo.get(id).is_none() {
            return Err(ValidationError::BookNotFound(id.to_string()));
        }
        if patch.is_empty() {
            return Err(ValidationError::EmptyPatch);
        }

        if let Some(title) = patch.title.as_deref() {
            require_non_empty(Some(title), "Title")?;
        }
        if let Some(author) = patch.author.as_deref() {
            require_non_empty(Some(author), "Author")?;
        }
        let availability = patch
            .availability
            .as_deref()
            .map(normalize_availability)
            .transpose()?;

        Ok(CheckedPatch {
            title: patch.title,
            author: patch.author,
            genre: patch.genre,
            availability,
        })
    }
}

/// Patch whose supplied fields have all passed validation.
struct CheckedPatch {
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    availability: Option<Availability>,
}

impl CheckedPatch {
    /// Writes supplied fields into a working copy; returns the names written.
    fn apply_to(self, book: &mut Book) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if let Some(title) = self.title {
            book.title = title;
            fields.push("title");
        }
        if let Some(author) = self.author {
            book.author = author;
            fields.push("author");
        }
        if let Some(genre) = self.genre {
            book.genre = genre;
            fields.push("genre");
        }
        if let Some(availability) = self.availability {
            book.availability = availability;
            fields.push("availability");
        }
        fields
    }
}

fn take_required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    require_non_empty(value.as_deref(), field)?;
    Ok(value.unwrap_or_default())
}
