//! Engine trait and request/response types

use async_trait::async_trait;
use promptbridge_models::ChatMessage;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Single-turn generation request
///
/// Carries the full ordered message window for one stateless call. The
/// engine keeps no state between requests; whatever context it should see
/// must be in `messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Create a new generation request
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set temperature
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }
}

/// Reason generation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
}

/// Single-turn generation response
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub content: String,
    pub finish_reason: FinishReason,
}

/// Stateless single-turn text engine
///
/// Implemented by the platform inference bindings. Each call is isolated,
/// so conversation state lives entirely in
/// [`ChatMemory`](crate::memory::ChatMemory); the caller feeds the response
/// back into memory after the call returns.
#[async_trait]
pub trait TextEngine: Send + Sync {
    /// Platform name, e.g. "apple-foundation" or "mlkit-genai"
    fn platform(&self) -> &str;

    /// Run one stateless generation call
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;
}
