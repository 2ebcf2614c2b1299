//! Project Backend Adapters.
//!
//! - `BackendContextSource` - ProjectContextSource over the project backend's REST API

mod context_source;

pub use context_source::{BackendClientConfig, BackendContextSource, DEFAULT_BACKEND_URL};
