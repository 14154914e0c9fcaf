//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical book record held by the catalog.
//! - Define raw input shapes (`BookDraft`, `BookPatch`) that only become
//!   records through catalog validation.
//!
//! # Invariants
//! - Every stored book is identified by a caller-provided `id` that never
//!   changes after insertion.
//! - Stored availability is always a canonical `Availability` value.

pub mod book;
