//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide ordered insert/lookup/replace/remove over the catalog's records.
//!
//! # Invariants
//! - `insert` and `update` validate the record before any mutation.
//! - No two stored records share an `id`.
//! - `books()` returns records in insertion order.
//! - Lookups match `id` exactly (case-sensitive, untrimmed).
//! - Linear scans only; the catalog is expected to stay small.

use crate::model::book::Book;
use crate::validator::{require_unique_id, ValidationError};

/// Storage interface for catalog records.
pub trait BookRepository {
    /// All records in insertion order.
    fn books(&self) -> &[Book];
    /// Appends a record after validating it and checking id uniqueness.
    fn insert(&mut self, book: Book) -> Result<(), ValidationError>;
    /// Replaces the stored record with the same id, keeping its position.
    ///
    /// Fails with `BookNotFound` when no record has that id.
    fn update(&mut self, book: Book) -> Result<(), ValidationError>;
    /// Removes the record with this id; returns whether one was removed.
    fn remove(&mut self, id: &str) -> bool;

    /// First record with exactly this id.
    fn get(&self, id: &str) -> Option<&Book> {
        self.books().iter().find(|book| book.id() == id)
    }

    fn len(&self) -> usize {
        self.books().len()
    }

    fn is_empty(&self) -> bool {
        self.books().is_empty()
    }
}

/// Vec-backed repository owning the record sequence for one catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }
}

impl BookRepository for InMemoryBookRepository {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn insert(&mut self, book: Book) -> Result<(), ValidationError> {
        book.validate()?;
        require_unique_id(book.id(), &self.books)?;
        self.books.push(book);
        Ok(())
    }

    fn update(&mut self, book: Book) -> Result<(), ValidationError> {
        book.validate()?;
        let index = self
            .position(book.id())
            .ok_or_else(|| ValidationError::BookNotFound(book.id().to_string()))?;
        self.books[index] = book;
        Ok(())
    }

    fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BookRepository, InMemoryBookRepository};
    use crate::model::book::{Availability, Book};
    use crate::validator::ValidationError;

    fn book(id: &str, title: &str) -> Book {
        Book::from_parts(
            id.to_string(),
            title.to_string(),
            "author".to_string(),
            String::new(),
            Availability::Available,
        )
    }

    #[test]
    fn insert_preserves_order_and_lookup_is_exact() {
        let mut repo = InMemoryBookRepository::new();
        repo.insert(book("b", "second")).unwrap();
        repo.insert(book("a", "first")).unwrap();

        let ids: Vec<_> = repo.books().iter().map(Book::id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(repo.get("a").map(|b| b.title.as_str()), Some("first"));
        assert!(repo.get("A").is_none());
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn insert_rejects_duplicate_and_blank_records() {
        let mut repo = InMemoryBookRepository::new();
        repo.insert(book("a", "first")).unwrap();

        assert_eq!(
            repo.insert(book("a", "again")).unwrap_err(),
            ValidationError::DuplicateId("a".to_string())
        );
        assert_eq!(
            repo.insert(book("b", "  ")).unwrap_err(),
            ValidationError::EmptyField { field: "Title" }
        );
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn update_replaces_in_place_and_validates() {
        let mut repo = InMemoryBookRepository::new();
        repo.insert(book("a", "first")).unwrap();
        repo.insert(book("b", "second")).unwrap();

        let mut edited = book("a", "renamed");
        edited.genre = "Essay".to_string();
        repo.update(edited).unwrap();
        assert_eq!(repo.books()[0].title, "renamed");
        assert_eq!(repo.books()[0].genre, "Essay");

        assert_eq!(
            repo.update(book("a", "")).unwrap_err(),
            ValidationError::EmptyField { field: "Title" }
        );
        assert_eq!(
            repo.update(book("z", "ghost")).unwrap_err(),
            ValidationError::BookNotFound("z".to_string())
        );
        assert_eq!(repo.books()[0].title, "renamed");
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut repo = InMemoryBookRepository::new();
        repo.insert(book("a", "first")).unwrap();

        assert!(repo.remove("a"));
        assert!(!repo.remove("a"));
        assert!(repo.is_empty());
    }
}
