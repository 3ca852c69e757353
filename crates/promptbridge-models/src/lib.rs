//! PromptBridge Models - shared bridge-surface primitives
//!
//! Value types that cross the JS/TS surface of the bridge: chat roles,
//! messages, and the diagnostic conversation snapshot. Everything here is
//! serde-serializable and exported to TypeScript via ts-rs.

pub mod message;
pub mod snapshot;

pub use message::{ChatMessage, Role};
pub use snapshot::ChatSnapshot;
