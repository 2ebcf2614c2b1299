//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `catalog` - Static registry of document types and their section trees
//! - `context` - Project context records, statistics and retention limits
//! - `document` - Prompt assembly, response parsing and the generated document

pub mod catalog;
pub mod context;
pub mod document;
