//! Conversation types
//!
//! `ConversationState` is threaded through one pipeline run and discarded
//! once the response is returned; anything that must survive across turns
//! lives in the session store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Confidence, Domain, Intent, Language, SourceRef};

/// Role of a stored message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Classification metadata attached to a message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

impl MessageMeta {
    pub fn legal(domain: Domain) -> Self {
        Self {
            intent: Some(Intent::LegalQuery),
            domain: Some(domain),
        }
    }

    pub fn casual() -> Self {
        Self {
            intent: Some(Intent::CasualChat),
            domain: None,
        }
    }
}

/// One message in a session log, immutable once appended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMeta>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, meta: MessageMeta) -> Self {
        self.metadata = Some(meta);
        self
    }
}

/// Pipeline progress marker
///
/// The pipeline is strictly ordered; branching occurs only once, after
/// intent detection. `CasualHandled` and `Composed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    #[default]
    Start,
    LanguageDetected,
    IntentDetected,
    CasualHandled,
    DomainClassified,
    ContextRetrieved,
    Analyzed,
    Recommended,
    LawyerAssigned,
    Composed,
}

impl PipelineStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::CasualHandled | Self::Composed)
    }
}

/// Mutable record threaded through one pipeline run
///
/// Fields are populated strictly in pipeline order. The state is created
/// empty for each query and discarded after the response is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationState {
    /// Original query text
    pub query: String,
    /// Prior-turn context supplied by the session store, if any
    pub history_context: Option<String>,
    pub stage: PipelineStage,
    pub language: Option<Language>,
    pub intent: Option<Intent>,
    pub domain: Option<Domain>,
    /// Assembled retrieval context text
    pub context: String,
    pub sources: Vec<SourceRef>,
    pub confidence: Confidence,
    pub analysis: String,
    pub recommendations: String,
    pub lawyer_guidance: String,
    pub final_response: String,
}

impl ConversationState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            history_context: None,
            stage: PipelineStage::Start,
            language: None,
            intent: None,
            domain: None,
            context: String::new(),
            sources: Vec::new(),
            confidence: Confidence::Low,
            analysis: String::new(),
            recommendations: String::new(),
            lawyer_guidance: String::new(),
            final_response: String::new(),
        }
    }

    pub fn with_history_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        if !context.is_empty() {
            self.history_context = Some(context);
        }
        self
    }

    /// Language as resolved so far, defaulting to English before (or if)
    /// detection ran
    pub fn language_or_default(&self) -> Language {
        self.language.unwrap_or_default()
    }
}

/// Derived per-session summary for sidebar display
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SidebarSummary {
    /// Rolling context summary, most recent last, at most 5 entries
    pub context_summary: Vec<String>,
    /// Deduplicated legal domains discussed, insertion order
    pub topics_discussed: Vec<String>,
    /// Number of completed exchanges (message log length / 2)
    pub message_count: usize,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_empty() {
        let state = ConversationState::new("What is section 420?");
        assert_eq!(state.stage, PipelineStage::Start);
        assert!(state.language.is_none());
        assert!(state.final_response.is_empty());
    }

    #[test]
    fn test_terminal_stages() {
        assert!(PipelineStage::CasualHandled.is_terminal());
        assert!(PipelineStage::Composed.is_terminal());
        assert!(!PipelineStage::ContextRetrieved.is_terminal());
    }

    #[test]
    fn test_empty_history_context_ignored() {
        let state = ConversationState::new("q").with_history_context("");
        assert!(state.history_context.is_none());
    }
}
