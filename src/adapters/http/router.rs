//! Top-level router composition.
//!
//! ```text
//! cors -> timeout (504 envelope) -> trace -> /health, /ready
//!                          -> api_key guard -> /api/documentation/*
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::{BoxError, Json, Router};
use tower::timeout::error::Elapsed;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::documentation::dto::ErrorResponse;
use super::documentation::{documentation_router, DocumentationAppState};
use super::health::health_router;
use super::middleware::{api_key_middleware, ApiKeyAuth};

/// Server-level layer options.
#[derive(Debug, Clone)]
pub struct HttpLayerOptions {
    /// Allowed browser origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for HttpLayerOptions {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(300),
        }
    }
}

/// Builds the application router: probes, guarded documentation routes and
/// request tracing.
pub fn app_router(state: DocumentationAppState, auth: ApiKeyAuth) -> Router {
    let auth = Arc::new(auth);

    let documentation = documentation_router()
        .route_layer(middleware::from_fn_with_state(auth, api_key_middleware));

    Router::new()
        .merge(health_router())
        .merge(documentation)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wraps a router with the timeout and CORS layers.
///
/// CORS is outermost so preflight requests are answered before the guard.
/// A request that outlives `request_timeout` gets a 504 with the error
/// envelope.
pub fn with_server_layers(router: Router, auth: &ApiKeyAuth, options: &HttpLayerOptions) -> Router {
    let timeout = options.request_timeout;
    router
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    layer_error_response(err, timeout)
                }))
                .timeout(timeout),
        )
        .layer(cors_layer(&options.cors_origins, auth))
}

fn layer_error_response(err: BoxError, timeout: Duration) -> Response {
    if err.is::<Elapsed>() {
        tracing::warn!(timeout = ?timeout, "Request timed out");
        return (
            StatusCode::GATEWAY_TIMEOUT,
            Json(ErrorResponse::new(format!(
                "Request timed out after {:?}",
                timeout
            ))),
        )
            .into_response();
    }

    tracing::error!(error = %err, "Unhandled middleware error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!("Unhandled internal error: {}", err))),
    )
        .into_response()
}

fn cors_layer(origins: &[String], auth: &ApiKeyAuth) -> CorsLayer {
    let headers = [
        AUTHORIZATION,
        CONTENT_TYPE,
        ACCEPT,
        COOKIE,
        auth.header_name().clone(),
    ];

    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    if allowed.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(headers)
    } else {
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods(Any)
            .allow_headers(headers)
    }
}
