//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into use-case APIs.
//! - Keep the menu layer decoupled from storage details.

pub mod catalog_service;
