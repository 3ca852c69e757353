//! Read-only conversation snapshot
//!
//! The one externally-shaped structure the memory subsystem exposes, used
//! by the JS surface for diagnostics and caller-side persistence.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::message::ChatMessage;

/// Immutable view of a conversation at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatSnapshot {
    /// Ordered messages, system entry first when present
    pub messages: Vec<ChatMessage>,
    /// System prompt, if set
    pub system_prompt: Option<String>,
    /// Number of user messages currently retained
    pub turn_count: usize,
    /// Configured retained-user-message bound
    pub max_turns: usize,
}
