//! Liveness and readiness probes.
//!
//! Both routes sit outside the API key guard.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::documentation::DocumentationAppState;

pub const SERVICE_NAME: &str = "NEXA Documentation Generation Agent";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ok: bool,
    pub ready: bool,
    pub gemini_configured: bool,
}

/// Creates the probe router.
///
/// Routes:
/// - `GET /health` - Service identity and version
/// - `GET /ready` - Whether the text generator has credentials
pub fn health_router() -> Router<DocumentationAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn ready(State(state): State<DocumentationAppState>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        ok: true,
        ready: true,
        gemini_configured: state.generator.provider_info().configured,
    })
}
