//! Stateless field validation and normalization.
//!
//! # Responsibility
//! - Check required fields, id uniqueness and availability values.
//! - Turn free-form availability text into a canonical `Availability`.
//!
//! # Invariants
//! - Functions hold no state and never mutate their inputs.
//! - Every rejection is a `ValidationError`, never a sentinel value.

use crate::model::book::{Availability, Book};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Recoverable rejection of catalog input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field missing or blank after trim.
    EmptyField { field: &'static str },
    /// Another record already uses this id.
    DuplicateId(String),
    /// Availability text is not one of the accepted values.
    InvalidAvailability(String),
    /// Update target does not exist.
    BookNotFound(String),
    /// Update patch names no field.
    EmptyPatch,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} cannot be empty"),
            Self::DuplicateId(id) => write!(f, "Book ID already exists: {id}"),
            Self::InvalidAvailability(raw) => {
                write!(f, "Invalid availability status: `{raw}`")
            }
            Self::BookNotFound(id) => write!(f, "Book not found: {id}"),
            Self::EmptyPatch => write!(f, "update must change at least one field"),
        }
    }
}

impl Error for ValidationError {}

impl ValidationError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => "empty_field",
            Self::DuplicateId(_) => "duplicate_id",
            Self::InvalidAvailability(_) => "invalid_availability",
            Self::BookNotFound(_) => "book_not_found",
            Self::EmptyPatch => "empty_patch",
        }
    }
}

/// Rejects absent or whitespace-only values.
///
/// Returns the value unchanged on success so callers can chain it.
pub fn require_non_empty<'a>(
    value: Option<&'a str>,
    field_name: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::EmptyField { field: field_name }),
    }
}

/// Rejects an id that exactly matches an existing record id.
///
/// Comparison is case-sensitive and does not trim.
pub fn require_unique_id(id: &str, existing: &[Book]) -> Result<(), ValidationError> {
    if existing.iter().any(|book| book.id() == id) {
        return Err(ValidationError::DuplicateId(id.to_string()));
    }
    Ok(())
}

/// Normalizes free-form availability text.
///
/// Accepts `available` and `checked out` in any letter case, with surrounding
/// whitespace. Inner spacing must be a single space.
pub fn normalize_availability(raw: &str) -> Result<Availability, ValidationError> {
    match raw.trim().to_uppercase().as_str() {
        "AVAILABLE" => Ok(Availability::Available),
        "CHECKED OUT" => Ok(Availability::CheckedOut),
        _ => Err(ValidationError::InvalidAvailability(raw.to_string())),
    }
}
