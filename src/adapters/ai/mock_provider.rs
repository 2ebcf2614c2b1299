//! Mock text generator for testing.
//!
//! Queued responses are consumed in order; once the queue is empty every
//! call returns a small default document. Prompts are recorded so tests can
//! assert on what the assembler produced.
//!
//! ```ignore
//! let generator = MockTextGenerator::new()
//!     .with_response("# Plan\nBody")
//!     .with_error(GenerationError::unavailable("down"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    GenerationError, GenerationRequest, GenerationResponse, ProviderInfo, TextGenerator,
    TokenUsage,
};

pub const MOCK_MODEL: &str = "mock-model-1";

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GenerationError),
}

#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    delay: Duration,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", MOCK_MODEL),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.push(MockResponse::Success(text.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.push(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.prompt.clone())
            .collect()
    }

    fn push(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success("# Mock Document\n\nMock content.".to_string()))
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let prompt_tokens = (request.prompt.len() / 4) as u32;
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success(text) => {
                let completion_tokens = (text.len() / 4) as u32;
                Ok(GenerationResponse::new(text, &self.info.model)
                    .with_usage(TokenUsage::new(prompt_tokens, completion_tokens)))
            }
            MockResponse::Error(err) => Err(err),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let generator = MockTextGenerator::new()
            .with_response("first")
            .with_error(GenerationError::EmptyResponse);

        let first = generator.generate(GenerationRequest::new("a")).await.unwrap();
        let second = generator.generate(GenerationRequest::new("b")).await;
        let third = generator.generate(GenerationRequest::new("c")).await.unwrap();

        assert_eq!(first.text, "first");
        assert_eq!(first.model, MOCK_MODEL);
        assert_eq!(second, Err(GenerationError::EmptyResponse));
        assert!(third.text.starts_with("# Mock Document"));
    }

    #[tokio::test]
    async fn records_prompts() {
        let generator = MockTextGenerator::new();
        let shared = generator.clone();

        generator.generate(GenerationRequest::new("one")).await.unwrap();
        generator.generate(GenerationRequest::new("two")).await.unwrap();

        assert_eq!(shared.call_count(), 2);
        assert_eq!(shared.prompts(), vec!["one".to_string(), "two".to_string()]);
    }

    #[tokio::test]
    async fn honours_delay() {
        let generator = MockTextGenerator::new().with_delay(Duration::from_millis(20));
        let start = std::time::Instant::now();

        generator.generate(GenerationRequest::new("x")).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
