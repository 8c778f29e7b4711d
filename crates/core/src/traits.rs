//! Boundary traits for pluggable backends
//!
//! All three seams of the system are traits so implementations can be
//! swapped without code changes and mocked in tests:
//! - `SimilaritySearch`: the external vector index
//! - `TextGenerator`: the external text-completion service
//! - `SessionStore`: conversational memory

use async_trait::async_trait;

use crate::{Language, Message, MessageMeta, Result, ScoredChunk, SidebarSummary};

/// External nearest-neighbor search over the legal document index
///
/// # Contract
///
/// Results are ordered best-to-worst by similarity (lowest distance
/// first). An absent or unbuilt index yields an empty sequence, not an
/// error; callers treat "no results" as a valid low-confidence outcome.
#[async_trait]
pub trait SimilaritySearch: Send + Sync {
    /// Return the `k` nearest chunks for `query`
    async fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>>;

    /// Whether the index is loaded and searchable
    async fn is_available(&self) -> bool {
        true
    }

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// External text-completion service
///
/// The composer always calls this interface; whether the concrete
/// variant is a remote LLM or something else is decided at construction
/// time. One prompt per call, no streaming at this boundary.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`
    ///
    /// Implementations must bound the call with a timeout; an expired
    /// timeout surfaces as an error, never an unbounded wait.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Whether the service is reachable
    async fn is_available(&self) -> bool;

    /// Model/backend name for logging
    fn name(&self) -> &str;
}

/// Per-session conversational memory
///
/// Keyed by an opaque session identifier. Implementations must serialize
/// mutations per session so a user message from one request is never
/// interleaved with an assistant message from another. All state is
/// process-local; nothing survives a restart.
pub trait SessionStore: Send + Sync {
    /// Ensure a session exists, creating an empty one if needed
    fn get_or_create(&self, session_id: &str);

    /// Append one message to a session
    ///
    /// Legal-query metadata additionally updates the rolling context
    /// summary and the topics-discussed list.
    fn append(&self, session_id: &str, message: Message);

    /// Append a paired user/assistant exchange atomically
    fn append_exchange(
        &self,
        session_id: &str,
        user_content: &str,
        assistant_content: &str,
        meta: MessageMeta,
    );

    /// Full message log for a session, insertion order
    fn history(&self, session_id: &str) -> Vec<Message>;

    /// Last `window_size` messages formatted as "User:"/"Assistant:"
    /// lines, each truncated to 200 characters
    fn context_window(&self, session_id: &str, window_size: usize) -> String;

    /// The user message before the current turn, if any
    fn previous_user_message(&self, session_id: &str) -> Option<String>;

    /// Sidebar summary for display
    fn sidebar_summary(&self, session_id: &str) -> SidebarSummary;

    /// Record the session's detected language
    fn set_language(&self, session_id: &str, language: Language);

    /// Delete a session and all its messages
    fn delete(&self, session_id: &str);

    /// Number of live sessions
    fn session_count(&self) -> usize;

    /// Identifiers of all live sessions, unordered
    fn session_ids(&self) -> Vec<String>;
}
