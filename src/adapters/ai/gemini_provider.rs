//! Gemini Provider - Implementation of TextGenerator for Google's Gemini API.
//!
//! Calls the non-streaming `generateContent` endpoint. A document prompt is
//! sent as a single user turn.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new()
//!     .with_api_key(api_key)
//!     .with_model("models/gemini-2.0-flash");
//!
//! let provider = GeminiProvider::new(config)?;
//! ```
//!
//! Without an API key the provider still constructs; every call then fails
//! with [`GenerationError::NotConfigured`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    FinishReason, GenerationError, GenerationRequest, GenerationResponse, ProviderInfo,
    TextGenerator, TokenUsage,
};

pub const DEFAULT_GEMINI_MODEL: &str = "models/gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fallback wait when a rate-limit response carries no retry hint.
const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Option<Secret<String>>,
    /// Model resource name (e.g., "models/gemini-2.0-flash").
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiConfig {
    /// Creates an unconfigured configuration with default model and endpoint.
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            max_retries: 2,
        }
    }

    /// Sets the API key. A blank key leaves the provider unconfigured.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = if key.trim().is_empty() {
            None
        } else {
            Some(Secret::new(key))
        };
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret().as_str())
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        generate_url(&self.config.base_url, &self.config.model)
    }

    async fn send_request(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<Response, GenerationError> {
        let body = GeminiRequest::from_generation(request);
        let url = self.generate_url();
        tracing::debug!(url = %url, prompt_chars = request.prompt.len(), "Calling Gemini");

        self.client
            .post(url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::timeout(self.config.timeout.as_secs())
                } else if e.is_connect() {
                    GenerationError::network(format!("Connection failed: {}", e))
                } else {
                    GenerationError::network(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<GenerationResponse, GenerationError> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), &error_body));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::parse(format!("Failed to parse response: {}", e)))?;

        interpret_response(gemini_response, &self.config.model)
    }

    async fn attempt(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let response = self.send_request(api_key, request).await?;
        self.parse_response(response).await
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let api_key = self.config.api_key().ok_or(GenerationError::NotConfigured)?;

        let mut retry_count = 0;
        loop {
            match self.attempt(api_key, &request).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    let delay = retry_delay(&err, retry_count);
                    tracing::warn!(
                        error = %err,
                        attempt = retry_count + 1,
                        delay_secs = delay.as_secs(),
                        "Gemini call failed, retrying"
                    );
                    sleep(delay).await;
                }
            }
            retry_count += 1;
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model).with_configured(self.config.is_configured())
    }
}

/// Exponential backoff (1s, 2s, 4s, ...), stretched to the server's hint
/// on rate limiting.
fn retry_delay(err: &GenerationError, retry_count: u32) -> Duration {
    let backoff = 1u64 << retry_count;
    match err {
        GenerationError::RateLimited { retry_after_secs } => {
            Duration::from_secs(backoff.max(u64::from(*retry_after_secs)))
        }
        _ => Duration::from_secs(backoff),
    }
}

fn generate_url(base_url: &str, model: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if model.starts_with("models/") {
        format!("{}/{}:generateContent", base, model)
    } else {
        format!("{}/models/{}:generateContent", base, model)
    }
}

/// Maps a non-success HTTP status to a generation error.
fn classify_status(status: u16, error_body: &str) -> GenerationError {
    match status {
        400 => GenerationError::invalid_request(error_message(error_body)),
        401 | 403 => GenerationError::AuthenticationFailed,
        429 => GenerationError::rate_limited(parse_retry_after(error_body)),
        500..=599 => GenerationError::unavailable(format!(
            "Server error {}: {}",
            status,
            error_message(error_body)
        )),
        _ => GenerationError::network(format!(
            "Unexpected status {}: {}",
            status,
            error_message(error_body)
        )),
    }
}

/// Extracts `error.message` from a Gemini error body, else returns the body.
fn error_message(error_body: &str) -> String {
    serde_json::from_str::<GeminiErrorBody>(error_body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| error_body.to_string())
}

/// Reads the `retryDelay` hint (e.g. `"17s"`) from a rate-limit body.
fn parse_retry_after(error_body: &str) -> u32 {
    let Ok(body) = serde_json::from_str::<GeminiErrorBody>(error_body) else {
        return DEFAULT_RETRY_AFTER_SECS;
    };

    body.error
        .into_iter()
        .flat_map(|error| error.details)
        .filter_map(|detail| detail.retry_delay)
        .find_map(|delay| {
            let secs = delay.trim_end_matches('s');
            secs.split('.').next().and_then(|whole| whole.parse::<u32>().ok())
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Converts a successful API body into a generation response.
fn interpret_response(
    response: GeminiResponse,
    model: &str,
) -> Result<GenerationResponse, GenerationError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenerationError::content_blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::EmptyResponse)?;

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("SAFETY") => return Err(GenerationError::content_blocked("SAFETY")),
        Some("STOP") | None => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some(_) => FinishReason::Other,
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let usage = response
        .usage_metadata
        .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
        .unwrap_or_default();

    Ok(GenerationResponse::new(text, model)
        .with_usage(usage)
        .with_finish_reason(finish_reason))
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

impl GeminiRequest {
    fn from_generation(request: &GenerationRequest) -> Self {
        let generation_config =
            if request.temperature.is_some() || request.max_output_tokens.is_some() {
                Some(GeminiGenerationConfig {
                    temperature: request.temperature,
                    max_output_tokens: request.max_output_tokens,
                })
            } else {
                None
            };

        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(request.prompt.clone()),
                }],
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: Option<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: Option<String>,
    #[serde(default)]
    details: Vec<GeminiErrorInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiErrorInfo {
    retry_delay: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GeminiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn retry_delay_honors_rate_limit_hint() {
        let limited = GenerationError::rate_limited(17);
        assert_eq!(retry_delay(&limited, 0), Duration::from_secs(17));
        assert_eq!(retry_delay(&limited, 1), Duration::from_secs(17));
        assert_eq!(retry_delay(&GenerationError::rate_limited(1), 2), Duration::from_secs(4));
    }

    #[test]
    fn retry_delay_backs_off_exponentially() {
        let down = GenerationError::unavailable("503");
        assert_eq!(retry_delay(&down, 0), Duration::from_secs(1));
        assert_eq!(retry_delay(&down, 1), Duration::from_secs(2));
        assert_eq!(retry_delay(&down, 2), Duration::from_secs(4));
    }

    #[test]
    fn rate_limit_status_carries_retry_delay_into_backoff() {
        let body = r#"{"error":{"code":429,"message":"quota","details":[{"retryDelay":"17s"}]}}"#;
        let err = classify_status(429, body);
        assert_eq!(err, GenerationError::rate_limited(17));
        assert_eq!(retry_delay(&err, 0), Duration::from_secs(17));
    }

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new()
            .with_api_key("test-key")
            .with_model("models/gemini-1.5-pro")
            .with_base_url("http://localhost:9999")
            .with_timeout(Duration::from_secs(30))
            .with_max_retries(5);

        assert_eq!(config.model, "models/gemini-1.5-pro");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.api_key(), Some("test-key"));
    }

    #[test]
    fn config_defaults() {
        let config = GeminiConfig::default();

        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.max_retries, 2);
        assert!(!config.is_configured());
    }

    #[test]
    fn blank_api_key_is_unconfigured() {
        assert!(!GeminiConfig::new().with_api_key("  ").is_configured());
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = GeminiConfig::new().with_api_key("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[tokio::test]
    async fn generate_without_key_is_not_configured() {
        let provider = GeminiProvider::new(GeminiConfig::new()).unwrap();

        let result = provider.generate(GenerationRequest::new("hello")).await;

        assert_eq!(result, Err(GenerationError::NotConfigured));
        assert!(!provider.provider_info().configured);
    }

    #[test]
    fn provider_info_reports_model() {
        let provider = GeminiProvider::new(GeminiConfig::new().with_api_key("k")).unwrap();
        let info = provider.provider_info();

        assert_eq!(info.name, "gemini");
        assert_eq!(info.model, DEFAULT_GEMINI_MODEL);
        assert!(info.configured);
    }

    #[test]
    fn generate_url_adds_models_prefix_when_missing() {
        assert_eq!(
            generate_url("https://example.test/v1beta/", "models/gemini-2.0-flash"),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(
            generate_url("https://example.test/v1beta", "gemini-2.0-flash"),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn request_body_uses_single_user_turn() {
        let body = GeminiRequest::from_generation(&GenerationRequest::new("Write it"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"contents": [{"role": "user", "parts": [{"text": "Write it"}]}]})
        );

        let tuned = GeminiRequest::from_generation(
            &GenerationRequest::new("Write it").with_max_output_tokens(8192),
        );
        assert_eq!(
            serde_json::to_value(&tuned).unwrap()["generationConfig"],
            json!({"maxOutputTokens": 8192})
        );
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(classify_status(400, "bad"), GenerationError::InvalidRequest(_)));
        assert_eq!(classify_status(401, ""), GenerationError::AuthenticationFailed);
        assert_eq!(classify_status(403, ""), GenerationError::AuthenticationFailed);
        assert!(matches!(classify_status(429, ""), GenerationError::RateLimited { .. }));
        assert!(matches!(classify_status(503, ""), GenerationError::Unavailable { .. }));
        assert!(matches!(classify_status(418, ""), GenerationError::Network(_)));
    }

    #[test]
    fn invalid_request_carries_api_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            classify_status(400, body),
            GenerationError::invalid_request("API key not valid")
        );
    }

    #[test]
    fn parse_retry_after_from_details() {
        let body = r#"{"error":{"code":429,"details":[{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"17s"}]}}"#;
        assert_eq!(parse_retry_after(body), 17);
        assert_eq!(parse_retry_after("not json"), DEFAULT_RETRY_AFTER_SECS);
    }

    #[test]
    fn interprets_successful_response() {
        let parsed = interpret_response(
            response(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "# Title\n"}, {"text": "Body"}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 100, "candidatesTokenCount": 20, "totalTokenCount": 120}
            })),
            "models/test",
        )
        .unwrap();

        assert_eq!(parsed.text, "# Title\nBody");
        assert_eq!(parsed.model, "models/test");
        assert_eq!(parsed.usage, TokenUsage::new(100, 20));
        assert_eq!(parsed.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn max_tokens_finish_is_length() {
        let parsed = interpret_response(
            response(json!({
                "candidates": [{"content": {"parts": [{"text": "partial"}]}, "finishReason": "MAX_TOKENS"}]
            })),
            "m",
        )
        .unwrap();
        assert_eq!(parsed.finish_reason, FinishReason::Length);
    }

    #[test]
    fn blocked_prompt_is_content_blocked() {
        let result = interpret_response(
            response(json!({"promptFeedback": {"blockReason": "OTHER"}})),
            "m",
        );
        assert_eq!(result, Err(GenerationError::content_blocked("OTHER")));
    }

    #[test]
    fn safety_finish_is_content_blocked() {
        let result = interpret_response(
            response(json!({"candidates": [{"finishReason": "SAFETY"}]})),
            "m",
        );
        assert_eq!(result, Err(GenerationError::content_blocked("SAFETY")));
    }

    #[test]
    fn missing_or_blank_text_is_empty_response() {
        let no_candidates = interpret_response(response(json!({})), "m");
        let blank = interpret_response(
            response(json!({"candidates": [{"content": {"parts": [{"text": "  \n"}]}}]})),
            "m",
        );

        assert_eq!(no_candidates, Err(GenerationError::EmptyResponse));
        assert_eq!(blank, Err(GenerationError::EmptyResponse));
    }
}
