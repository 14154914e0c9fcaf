//! Record storage contracts and implementations.
//!
//! # Responsibility
//! - Define the storage contract the catalog service is written against.
//! - Keep the record sequence owned by one explicit container.
//!
//! # Invariants
//! - Write paths must call `Book::validate()` and reject duplicate ids before
//!   mutating storage.
//! - Storage never hands out `&mut Book`; changes go through `update`.
//! - Iteration order is insertion order.

pub mod book_repo;
