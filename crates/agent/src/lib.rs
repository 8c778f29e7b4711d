//! Conversation agent
//!
//! Everything between the HTTP surface and the external backends:
//! - `classify`: language, intent and legal-domain classifiers
//! - `composer`/`templates`: analysis and recommendation composition,
//!   LLM-backed with deterministic template fallback
//! - `lawyer`/`directory`: specialization guidance and the city lawyer
//!   directory
//! - `memory`: in-process session store
//! - `orchestrator`: the ordered per-query pipeline
//! - `front_door`: preemptive canned replies, meta-questions and
//!   directory lookups ahead of the pipeline

pub mod classify;
pub mod composer;
pub mod directory;
pub mod front_door;
pub mod lawyer;
pub mod memory;
pub mod orchestrator;
pub mod templates;

pub use classify::{DetectionPolicy, DomainClassifier, IntentClassifier, LanguageDetector};
pub use composer::{ComposedResponse, ResponseComposer};
pub use directory::LawyerDirectory;
pub use front_door::FrontDoor;
pub use memory::SessionMemory;
pub use orchestrator::Orchestrator;

use thiserror::Error;

/// Agent-level errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Session memory error: {0}")]
    Memory(String),
}

impl From<AgentError> for adalat_core::Error {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Memory(msg) => adalat_core::Error::Memory(msg),
            other => adalat_core::Error::Internal(other.to_string()),
        }
    }
}
