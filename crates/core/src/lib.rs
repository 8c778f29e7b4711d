//! Core types and traits for the legal assistant
//!
//! This crate provides the foundational vocabulary used across all other
//! crates:
//! - Language, intent and legal-domain classifications
//! - Retrieval types (chunks, context bundles, confidence levels)
//! - Conversation types (messages, per-query pipeline state)
//! - Boundary traits for pluggable backends (similarity search, text
//!   generation, session storage)
//! - Error types

pub mod conversation;
pub mod domain;
pub mod error;
pub mod language;
pub mod retrieval;
pub mod traits;

pub use conversation::{
    ConversationState, Message, MessageMeta, MessageRole, PipelineStage, SidebarSummary,
};
pub use domain::{Domain, Intent};
pub use error::{Error, Result};
pub use language::Language;
pub use retrieval::{Chunk, Confidence, ContextBundle, ScoredChunk, SourceRef};
pub use traits::{SessionStore, SimilaritySearch, TextGenerator};
