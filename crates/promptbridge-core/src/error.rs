//! Error types for the bridge core

use thiserror::Error;

/// Bridge core error types
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("engine error: {0}")]
    Engine(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
