//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod documentation;

pub use documentation::{
    DocumentMetadata, GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult,
};
