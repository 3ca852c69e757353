//! Conversation memory - bounded multi-turn history for stateless engines
//!
//! Both platform engines are single-turn: every generation call receives
//! exactly the context it should see and remembers nothing afterwards.
//! This module owns that context:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       ChatMemory                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  system_prompt: Option<String>   (exempt from eviction)  │
//! │  turns: Vec<ChatMessage>         (user/assistant only)   │
//! │  ↓ user count > max_turns → evict oldest complete turns  │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod chat;

pub use chat::{ChatMemory, ChatMemoryConfig, DEFAULT_MAX_TURNS};
