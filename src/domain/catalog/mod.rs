//! Document type catalog.
//!
//! A static registry mapping document type keys to their display metadata and
//! ordered section trees. The table is immutable and safe to share across
//! any number of concurrent readers.

mod definition;
mod registry;
mod templates;

pub use definition::{
    DocumentStructure, DocumentTypeDefinition, DocumentTypeKey, Section, Subsection,
};
pub use registry::{canonical_key, CatalogError, DocumentCatalog};
pub use templates::DOCUMENT_TYPES;
