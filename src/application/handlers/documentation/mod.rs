//! Documentation command handlers.

mod generate_document;

pub use generate_document::{
    DocumentMetadata, GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult,
};
