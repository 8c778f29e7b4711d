//! Text-completion integration
//!
//! Provides:
//! - An OpenAI-compatible chat-completions backend (Groq, OpenAI, vLLM,
//!   any server speaking the same protocol) implementing the core
//!   `TextGenerator` trait, with bounded timeouts and retry
//! - The bilingual prompt builder for legal analysis and
//!   recommendations

pub mod backend;
pub mod prompt;

pub use backend::{ChatApiBackend, LlmConfig};
pub use prompt::PromptBuilder;

use thiserror::Error;

/// Completion-service errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0}s")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<LlmError> for adalat_core::Error {
    fn from(err: LlmError) -> Self {
        adalat_core::Error::Generation(err.to_string())
    }
}
