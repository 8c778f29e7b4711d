//! Centralized constants
//!
//! Single source of truth for tunables used across the workspace, so the
//! retriever, memory and composer stay consistent without duplicated
//! literals.

/// Retrieval defaults
pub mod retrieval {
    /// Chunks requested from the similarity backend per query
    pub const DEFAULT_TOP_K: usize = 5;

    /// Character budget for the assembled context
    pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 3000;

    /// Separator between concatenated chunk texts
    pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

    /// Characters of chunk text kept in a provenance preview
    pub const PREVIEW_CHARS: usize = 100;

    /// Marker returned when the index yields nothing
    pub const NO_DOCUMENTS_MARKER: &str = "No relevant legal documents found";
}

/// Completion-service defaults
pub mod generation {
    /// Bound on a single completion call, in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Retry attempts for transient failures
    pub const DEFAULT_MAX_RETRIES: u32 = 2;

    /// Initial retry backoff in milliseconds, doubling per attempt
    pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 100;
}

/// Session-memory defaults
pub mod memory {
    /// Messages included in the formatted context window
    pub const DEFAULT_CONTEXT_WINDOW: usize = 10;

    /// Characters kept per message in the context window
    pub const CONTEXT_MESSAGE_CHARS: usize = 200;

    /// Rolling context-summary entries retained per session
    pub const MAX_SUMMARY_ENTRIES: usize = 5;

    /// Characters kept when a summary falls back to raw content
    pub const SUMMARY_CONTENT_CHARS: usize = 50;
}

/// Intent-classification thresholds
pub mod intent {
    /// Queries at or above this token count are never casual chat
    pub const CASUAL_MAX_TOKENS: usize = 15;

    /// Roman-Urdu token fraction above which the ratio policy says Urdu
    pub const URDU_TOKEN_RATIO: f32 = 0.3;
}

/// Response-composition limits
pub mod response {
    /// Source citations listed in the final response
    pub const MAX_CITED_SOURCES: usize = 3;
}
