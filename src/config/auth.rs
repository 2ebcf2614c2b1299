//! Service-to-service authentication configuration

use axum::http::HeaderName;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Agent API key configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Header that carries the key
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,

    /// Shared key. Absent or blank disables the check.
    pub api_key: Option<Secret<String>>,
}

impl AuthConfig {
    /// Whether requests must present a key
    pub fn is_enforced(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        HeaderName::try_from(self.api_key_header.trim())
            .map_err(|_| ValidationError::InvalidHeaderName(self.api_key_header.clone()))?;
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key_header: default_api_key_header(),
            api_key: None,
        }
    }
}

fn default_api_key_header() -> String {
    "X-API-Key".to_string()
}
