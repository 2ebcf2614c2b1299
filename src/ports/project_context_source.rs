//! Project Context Source Port - Interface for upstream project data.
//!
//! The documentation flow needs a snapshot of a project's tasks, sprints,
//! team, activity and blockers. The source gathers them on behalf of the
//! caller, forwarding the caller's credentials unchanged.

use async_trait::async_trait;

use crate::domain::context::ProjectContext;

/// Port for fetching project context.
#[async_trait]
pub trait ProjectContextSource: Send + Sync {
    /// Fetches context for one project, and optionally one sprint.
    async fn fetch_context(&self, request: ContextRequest)
        -> Result<ProjectContext, ContextFetchError>;
}

/// Credentials copied from the inbound request onto every outbound call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedCredentials {
    /// Raw `Authorization` header value.
    pub authorization: Option<String>,
    /// Raw `Cookie` header value.
    pub cookie: Option<String>,
}

impl ForwardedCredentials {
    pub fn is_empty(&self) -> bool {
        self.authorization.is_none() && self.cookie.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextRequest {
    pub project_id: String,
    pub sprint_id: Option<String>,
    pub credentials: ForwardedCredentials,
}

impl ContextRequest {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            sprint_id: None,
            credentials: ForwardedCredentials::default(),
        }
    }

    pub fn with_sprint(mut self, sprint_id: impl Into<String>) -> Self {
        self.sprint_id = Some(sprint_id.into());
        self
    }

    pub fn with_credentials(mut self, credentials: ForwardedCredentials) -> Self {
        self.credentials = credentials;
        self
    }
}

/// Upstream fetch errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextFetchError {
    #[error("cannot reach backend at {base_url}: {message}")]
    Connection { base_url: String, message: String },

    #[error("backend request to {endpoint} timed out")]
    Timeout { endpoint: String },

    #[error("backend returned HTTP {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The response parsed but lacked the expected top-level field.
    #[error("backend response from {endpoint} is missing '{field}'")]
    MissingField { endpoint: String, field: String },

    #[error("cannot decode backend response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ContextFetchError {
    pub fn connection(base_url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connection {
            base_url: base_url.into(),
            message: message.into(),
        }
    }

    pub fn timeout(endpoint: impl Into<String>) -> Self {
        Self::Timeout {
            endpoint: endpoint.into(),
        }
    }

    pub fn status(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    pub fn missing_field(endpoint: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            endpoint: endpoint.into(),
            field: field.into(),
        }
    }

    pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_request_builder_works() {
        let request = ContextRequest::new("p-1")
            .with_sprint("s-2")
            .with_credentials(ForwardedCredentials {
                authorization: Some("Bearer t".to_string()),
                cookie: None,
            });

        assert_eq!(request.project_id, "p-1");
        assert_eq!(request.sprint_id.as_deref(), Some("s-2"));
        assert!(!request.credentials.is_empty());
        assert!(ContextRequest::new("p").credentials.is_empty());
    }

    #[test]
    fn fetch_errors_display_endpoint() {
        assert_eq!(
            ContextFetchError::status("/tasks/p-1", 502).to_string(),
            "backend returned HTTP 502 for /tasks/p-1"
        );
        assert_eq!(
            ContextFetchError::missing_field("/project/p-1", "project").to_string(),
            "backend response from /project/p-1 is missing 'project'"
        );
    }
}
