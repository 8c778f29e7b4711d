//! HTTP surface
//!
//! axum router exposing chat (plain and SSE streaming), session-memory
//! management and a health check, over the shared [`state::AppState`].

pub mod http;
pub mod state;

pub use http::router;
pub use state::{build_state, AppState};

use thiserror::Error;

/// Server startup errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Initialization error: {0}")]
    Init(String),

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

impl From<adalat_llm::LlmError> for ServerError {
    fn from(err: adalat_llm::LlmError) -> Self {
        ServerError::Init(err.to_string())
    }
}
