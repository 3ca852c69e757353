//! Generation boundary - trait seam over the platform inference engines

mod engine;
mod mock_engine;

pub use engine::{FinishReason, GenerationRequest, GenerationResponse, TextEngine};
pub use mock_engine::{MockStep, MockStepKind, MockTextEngine};
