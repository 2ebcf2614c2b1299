//! HTTP adapter for the documentation module.
//!
//! # Endpoints
//!
//! - `GET /api/documentation/types` - Catalog listing
//! - `GET /api/documentation/types/{type}/structure` - Structure of one type
//! - `GET /api/documentation/structure/{type}` - Same structure, legacy path
//! - `POST /api/documentation/generate` - Generate a document from project context

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{DocumentationApiError, DocumentationAppState};
pub use routes::documentation_router;
