//! HTTP adapters - REST API implementations.

pub mod documentation;
pub mod health;
pub mod middleware;
pub mod router;

// Re-export key types for convenience
pub use documentation::{documentation_router, DocumentationApiError, DocumentationAppState};
pub use health::{health_router, SERVICE_NAME};
pub use middleware::{api_key_middleware, ApiKeyAuth, DEFAULT_API_KEY_HEADER};
pub use router::{app_router, with_server_layers, HttpLayerOptions};
