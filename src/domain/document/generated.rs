use serde::Serialize;

/// A heading-delimited slice of a generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSection {
    /// Heading depth, 1 through 6.
    pub level: u8,
    pub title: String,
    pub content: String,
}

/// Structured form of a model's markdown output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDocument {
    pub title: String,
    /// Full markdown with any wrapping code fence removed.
    pub content: String,
    pub sections: Vec<DocumentSection>,
    pub word_count: usize,
    /// Display name of the document type.
    pub document_type: String,
    pub category: String,
}
