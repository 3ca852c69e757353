//! Deterministic mock engine for unit and integration tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::{Duration, sleep};

use promptbridge_models::Role;

use crate::error::{BridgeError, Result};

use super::{FinishReason, GenerationRequest, GenerationResponse, TextEngine};

/// Deterministic step for scripted mock generations.
#[derive(Debug, Clone)]
pub enum MockStepKind {
    /// Return a plain text response.
    Text(String),
    /// Return an engine error.
    Error(String),
}

/// Scripted generation step with optional delay.
#[derive(Debug, Clone)]
pub struct MockStep {
    pub delay_ms: u64,
    pub kind: MockStepKind,
}

impl MockStep {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            kind: MockStepKind::Text(content.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            kind: MockStepKind::Error(message.into()),
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// A deterministic mock engine driven by scripted steps.
///
/// With an empty script it echoes the last user message, which keeps
/// multi-turn tests readable.
#[derive(Debug, Clone, Default)]
pub struct MockTextEngine {
    platform: String,
    script: Arc<Mutex<VecDeque<MockStep>>>,
}

impl MockTextEngine {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn from_steps(platform: impl Into<String>, steps: Vec<MockStep>) -> Self {
        Self {
            platform: platform.into(),
            script: Arc::new(Mutex::new(VecDeque::from(steps))),
        }
    }

    pub async fn push_step(&self, step: MockStep) {
        self.script.lock().await.push_back(step);
    }

    async fn next_step(&self) -> Option<MockStep> {
        self.script.lock().await.pop_front()
    }

    fn fallback_response(request: &GenerationRequest) -> GenerationResponse {
        let text = request
            .messages
            .iter()
            .rev()
            .find(|msg| matches!(msg.role, Role::User))
            .map(|msg| format!("mock-echo: {}", msg.content))
            .unwrap_or_else(|| "mock-ok".to_string());

        GenerationResponse {
            content: text,
            finish_reason: FinishReason::Stop,
        }
    }
}

#[async_trait]
impl TextEngine for MockTextEngine {
    fn platform(&self) -> &str {
        &self.platform
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let step = self.next_step().await;
        let Some(step) = step else {
            return Ok(Self::fallback_response(&request));
        };

        if step.delay_ms > 0 {
            sleep(Duration::from_millis(step.delay_ms)).await;
        }

        match step.kind {
            MockStepKind::Text(content) => Ok(GenerationResponse {
                content,
                finish_reason: FinishReason::Stop,
            }),
            MockStepKind::Error(message) => Err(BridgeError::Engine(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptbridge_models::ChatMessage;

    #[tokio::test]
    async fn mock_engine_returns_scripted_text() {
        let engine = MockTextEngine::from_steps("mock", vec![MockStep::text("hello")]);

        let response = engine
            .generate(GenerationRequest::new(vec![ChatMessage::user("ping")]))
            .await
            .expect("mock response should succeed");

        assert_eq!(response.content, "hello");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[tokio::test]
    async fn mock_engine_propagates_scripted_error() {
        let engine = MockTextEngine::from_steps("mock", vec![MockStep::error("engine is down")]);

        let result = engine
            .generate(GenerationRequest::new(vec![ChatMessage::user("ping")]))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn mock_engine_echoes_last_user_message_without_script() {
        let engine = MockTextEngine::new("mock");

        let response = engine
            .generate(GenerationRequest::new(vec![
                ChatMessage::user("first"),
                ChatMessage::assistant("reply"),
                ChatMessage::user("second"),
            ]))
            .await
            .expect("fallback response should succeed");

        assert_eq!(response.content, "mock-echo: second");
    }

    #[tokio::test]
    async fn mock_engine_reports_platform_name() {
        let engine = MockTextEngine::new("mock-apple");
        assert_eq!(engine.platform(), "mock-apple");
    }
}
