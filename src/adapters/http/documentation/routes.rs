//! Route configuration for documentation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    generate_document, get_document_structure, list_document_types, DocumentationAppState,
};

/// Creates the documentation router.
///
/// Routes:
/// - `GET /api/documentation/types` - List document types and categories
/// - `GET /api/documentation/types/:type/structure` - Structure of one type
/// - `GET /api/documentation/structure/:type` - Same, legacy path
/// - `POST /api/documentation/generate` - Generate a document
pub fn documentation_router() -> Router<DocumentationAppState> {
    Router::new()
        .route("/api/documentation/types", get(list_document_types))
        .route(
            "/api/documentation/types/:document_type/structure",
            get(get_document_structure),
        )
        .route(
            "/api/documentation/structure/:document_type",
            get(get_document_structure),
        )
        .route("/api/documentation/generate", post(generate_document))
}
