//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TextGenerator` - Generative model that turns a prompt into markdown
//! - `ProjectContextSource` - Upstream project-management data

mod project_context_source;
mod text_generator;

pub use project_context_source::{ContextFetchError, ContextRequest, ForwardedCredentials, ProjectContextSource};
pub use text_generator::{
    FinishReason, GenerationError, GenerationRequest, GenerationResponse, ProviderInfo,
    TextGenerator, TokenUsage,
};
