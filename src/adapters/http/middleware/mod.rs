//! HTTP middleware for axum.
//!
//! - `api_key` - Shared-key guard for service-to-service calls

pub mod api_key;

pub use api_key::{api_key_middleware, ApiKeyAuth, DEFAULT_API_KEY_HEADER};
