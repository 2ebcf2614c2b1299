//! HTTP handlers for documentation endpoints.
//!
//! Catalog queries are answered directly from the static catalog. Generation
//! goes through the application layer's `GenerateDocumentHandler`.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::documentation::{GenerateDocumentError, GenerateDocumentHandler};
use crate::domain::catalog::{CatalogError, DocumentCatalog};
use crate::domain::document::ResponseParser;
use crate::ports::{ForwardedCredentials, ProjectContextSource, TextGenerator};

use super::dto::{
    DocumentStructureResponse, ErrorResponse, GenerateDocumentRequest, GenerateDocumentResponse,
    ListDocumentTypesResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct DocumentationAppState {
    pub catalog: DocumentCatalog,
    pub context_source: Arc<dyn ProjectContextSource>,
    pub generator: Arc<dyn TextGenerator>,
    pub parser: Arc<ResponseParser>,
}

impl DocumentationAppState {
    /// State over the built-in catalog.
    pub fn new(
        context_source: Arc<dyn ProjectContextSource>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            catalog: DocumentCatalog::builtin(),
            context_source,
            generator,
            parser: Arc::new(ResponseParser::new()),
        }
    }

    pub fn generate_document_handler(&self) -> GenerateDocumentHandler {
        GenerateDocumentHandler::new(
            self.catalog,
            self.context_source.clone(),
            self.generator.clone(),
            self.parser.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/documentation/types - List document types and categories
pub async fn list_document_types(
    State(state): State<DocumentationAppState>,
) -> Json<ListDocumentTypesResponse> {
    Json(ListDocumentTypesResponse {
        success: true,
        document_types: state.catalog.list_types(),
        categories: state.catalog.list_categories(),
    })
}

/// GET /api/documentation/types/:type/structure - Get a document type's structure
///
/// Also served at `/api/documentation/structure/:type`.
pub async fn get_document_structure(
    State(state): State<DocumentationAppState>,
    Path(document_type): Path<String>,
) -> Result<Json<DocumentStructureResponse>, DocumentationApiError> {
    let definition = state.catalog.resolve(&document_type)?;

    tracing::debug!(
        requested = %document_type,
        document_type = definition.key,
        sections = definition.sections.len(),
        "Serving document structure"
    );

    Ok(Json(DocumentStructureResponse {
        success: true,
        document_type: definition.key,
        structure: definition.structure(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/documentation/generate - Generate a document
pub async fn generate_document(
    State(state): State<DocumentationAppState>,
    headers: HeaderMap,
    Json(request): Json<GenerateDocumentRequest>,
) -> Result<impl IntoResponse, DocumentationApiError> {
    tracing::info!(
        document_type = %request.document_type,
        project_id = %request.project_id,
        sprint_id = ?request.sprint_id,
        "Document generation requested"
    );

    let credentials = forwarded_credentials(&headers);
    let handler = state.generate_document_handler();
    let result = handler.handle(request.into_command(credentials)).await?;

    Ok(Json(GenerateDocumentResponse {
        success: true,
        document: result.document,
        metadata: result.metadata,
    }))
}

/// Copies the caller's `Authorization` and `Cookie` headers.
fn forwarded_credentials(headers: &HeaderMap) -> ForwardedCredentials {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let cookies: Vec<&str> = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    let cookie = (!cookies.is_empty()).then(|| cookies.join("; "));

    ForwardedCredentials {
        authorization,
        cookie,
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum DocumentationApiError {
    NotFound(String),
    Internal(String),
}

impl From<CatalogError> for DocumentationApiError {
    fn from(err: CatalogError) -> Self {
        DocumentationApiError::NotFound(err.to_string())
    }
}

impl From<GenerateDocumentError> for DocumentationApiError {
    fn from(err: GenerateDocumentError) -> Self {
        match err {
            GenerateDocumentError::UnknownDocumentType(e) => e.into(),
            other => DocumentationApiError::Internal(format!("Document generation failed: {}", other)),
        }
    }
}

impl IntoResponse for DocumentationApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            DocumentationApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Document type lookup failed");
                (StatusCode::NOT_FOUND, msg)
            }
            DocumentationApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Documentation request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ContextFetchError, GenerationError};
    use axum::http::HeaderValue;

    #[test]
    fn forwards_authorization_and_joins_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("b=2"));

        let credentials = forwarded_credentials(&headers);

        assert_eq!(credentials.authorization.as_deref(), Some("Bearer abc"));
        assert_eq!(credentials.cookie.as_deref(), Some("a=1; b=2"));
    }

    #[test]
    fn no_headers_means_no_credentials() {
        assert!(forwarded_credentials(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn unknown_type_maps_to_not_found() {
        let err: DocumentationApiError = GenerateDocumentError::UnknownDocumentType(
            CatalogError::UnknownDocumentType("x".to_string()),
        )
        .into();

        assert!(matches!(err, DocumentationApiError::NotFound(msg) if msg == "Document type 'x' not found"));
    }

    #[test]
    fn failures_map_to_internal_with_prefix() {
        let upstream: DocumentationApiError =
            GenerateDocumentError::UpstreamFetch(ContextFetchError::timeout("/tasks/p")).into();
        let generation: DocumentationApiError =
            GenerateDocumentError::Generation(GenerationError::NotConfigured).into();

        assert!(matches!(
            upstream,
            DocumentationApiError::Internal(msg)
                if msg == "Document generation failed: Failed to fetch project context: backend request to /tasks/p timed out"
        ));
        assert!(matches!(
            generation,
            DocumentationApiError::Internal(msg)
                if msg == "Document generation failed: Text generation failed: text generator is not configured"
        ));
    }

    #[test]
    fn error_status_codes() {
        let not_found = DocumentationApiError::NotFound("x".to_string()).into_response();
        let internal = DocumentationApiError::Internal("y".to_string()).into_response();

        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
