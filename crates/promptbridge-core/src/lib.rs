//! PromptBridge Core - conversation memory for on-device LLM bridges
//!
//! This crate provides:
//! - Bounded conversation memory with complete-turn eviction
//! - Deterministic single-string prompt rendering
//! - The generation boundary trait implemented by platform engines
//! - Injected stream session identifier generation

pub mod error;
pub mod llm;
pub mod memory;
pub mod session;

// Re-export commonly used types
pub use error::{BridgeError, Result};
pub use llm::{
    FinishReason, GenerationRequest, GenerationResponse, MockStep, MockStepKind, MockTextEngine,
    TextEngine,
};
pub use memory::{ChatMemory, ChatMemoryConfig, DEFAULT_MAX_TURNS};
pub use promptbridge_models::{ChatMessage, ChatSnapshot, Role};
pub use session::{CountingSessions, SessionId, SessionIdSource, UuidSessions};
