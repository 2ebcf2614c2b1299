//! Service-to-service API key middleware for axum.
//!
//! Callers present a shared key in a configurable header. When no key is
//! configured the middleware runs in open mode and lets every request through.
//!
//! ```ignore
//! use axum::{middleware, Router};
//! use std::sync::Arc;
//!
//! let auth = Arc::new(ApiKeyAuth::new("X-API-Key", Some(Secret::new(key)))?);
//! let app = Router::new()
//!     .route("/api/documentation/types", get(list_document_types))
//!     .route_layer(middleware::from_fn_with_state(auth, api_key_middleware));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::InvalidHeaderName, HeaderMap, HeaderName, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::adapters::http::documentation::dto::ErrorResponse;

pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

const REJECTION_MESSAGE: &str = "Invalid or missing agent API key";

/// Expected API key and the header that carries it.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    header: HeaderName,
    key: Option<Secret<String>>,
}

impl ApiKeyAuth {
    /// Builds the guard. A blank key means open mode.
    ///
    /// Header names are case-insensitive; `X-API-Key` and `x-api-key` match
    /// the same incoming header.
    pub fn new(header: &str, key: Option<Secret<String>>) -> Result<Self, InvalidHeaderName> {
        let header = HeaderName::try_from(header.trim())?;
        let key = key.filter(|k| !k.expose_secret().is_empty());
        Ok(Self { header, key })
    }

    /// A guard that accepts every request.
    pub fn open() -> Self {
        Self {
            header: HeaderName::from_static("x-api-key"),
            key: None,
        }
    }

    pub fn header_name(&self) -> &HeaderName {
        &self.header
    }

    pub fn is_open(&self) -> bool {
        self.key.is_none()
    }

    /// Checks the request headers against the configured key.
    pub fn verify(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = &self.key else {
            return true;
        };

        headers
            .get(&self.header)
            .map(|incoming| {
                bool::from(
                    incoming
                        .as_bytes()
                        .ct_eq(expected.expose_secret().as_bytes()),
                )
            })
            .unwrap_or(false)
    }
}

/// Rejects requests that do not carry the configured API key.
pub async fn api_key_middleware(
    State(auth): State<Arc<ApiKeyAuth>>,
    request: Request,
    next: Next,
) -> Response {
    if auth.verify(request.headers()) {
        return next.run(request).await;
    }

    tracing::warn!(
        path = %request.uri().path(),
        header = %auth.header_name(),
        "Rejected request without a valid agent API key"
    );

    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new(REJECTION_MESSAGE)),
    )
        .into_response()
}
