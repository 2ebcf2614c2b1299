//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text generators (Gemini, mock)
//! - `backend` - Project backend REST client
//! - `http` - Axum routes, middleware and router composition

pub mod ai;
pub mod backend;
pub mod http;

pub use ai::{GeminiConfig, GeminiProvider, MockTextGenerator};
pub use backend::{BackendClientConfig, BackendContextSource};
