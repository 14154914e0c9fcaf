//! Core catalog logic for Shelf.
//! This crate is the single source of truth for book record invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validator;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{Availability, Book, BookDraft, BookPatch};
pub use repo::book_repo::{BookRepository, InMemoryBookRepository};
pub use service::catalog_service::CatalogService;
pub use validator::{
    normalize_availability, require_non_empty, require_unique_id, ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
