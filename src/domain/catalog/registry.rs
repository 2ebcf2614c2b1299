//! Read-only lookup over a table of document type definitions.

use std::collections::BTreeSet;

use thiserror::Error;

use super::definition::DocumentTypeDefinition;
use super::templates::DOCUMENT_TYPES;

/// Errors raised by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The requested key is not present in the catalog.
    #[error("Document type '{0}' not found")]
    UnknownDocumentType(String),
}

/// Registry of document types.
///
/// Wraps a `'static` table so tests can substitute a fixture table.
/// Copying the catalog is free; every instance shares the same data.
#[derive(Debug, Clone, Copy)]
pub struct DocumentCatalog {
    types: &'static [DocumentTypeDefinition],
}

impl Default for DocumentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DocumentCatalog {
    /// Creates a catalog over an arbitrary table.
    pub const fn new(types: &'static [DocumentTypeDefinition]) -> Self {
        Self { types }
    }

    /// The catalog of built-in document types.
    pub const fn builtin() -> Self {
        Self::new(DOCUMENT_TYPES)
    }

    /// All definitions, in table order.
    pub fn list_types(&self) -> &'static [DocumentTypeDefinition] {
        self.types
    }

    /// Distinct categories across all definitions, sorted ascending.
    pub fn list_categories(&self) -> Vec<&'static str> {
        self.types
            .iter()
            .map(|def| def.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Exact-match lookup on the stable key.
    pub fn get_structure(&self, key: &str) -> Option<&'static DocumentTypeDefinition> {
        self.types.iter().find(|def| def.key == key)
    }

    /// Canonicalizes a caller-supplied key and looks it up.
    ///
    /// Keys are trimmed and ASCII-uppercased, so `srs`, ` Srs ` and `SRS`
    /// all resolve to the same definition.
    pub fn resolve(&self, raw: &str) -> Result<&'static DocumentTypeDefinition, CatalogError> {
        self.get_structure(&canonical_key(raw))
            .ok_or_else(|| CatalogError::UnknownDocumentType(raw.to_string()))
    }
}

/// Folds a raw document type key into catalog casing.
pub fn canonical_key(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
