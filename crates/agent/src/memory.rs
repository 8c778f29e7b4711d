//! In-process session memory
//!
//! Sessions live in a `DashMap` keyed by session id, each behind its own
//! mutex so concurrent requests against the same session serialize their
//! mutations and the paired user/assistant invariant holds. Nothing
//! survives a restart.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use regex::Regex;

use adalat_config::constants::memory;
use adalat_core::{
    Language, Message, MessageMeta, MessageRole, SessionStore, SidebarSummary,
};

/// Matches "Section 420", "Dafa 302", "Article 25" (case-insensitive)
static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:section|dafa|article)\s+(\d+)").expect("static section regex")
});

#[derive(Debug)]
struct Session {
    messages: Vec<Message>,
    context_summary: Vec<String>,
    topics_discussed: Vec<String>,
    language: Language,
}

impl Session {
    fn new() -> Self {
        Self {
            messages: Vec::new(),
            context_summary: Vec::new(),
            topics_discussed: Vec::new(),
            language: Language::default(),
        }
    }

    fn record(&mut self, message: Message) {
        if let Some(meta) = &message.metadata {
            if meta.intent == Some(adalat_core::Intent::LegalQuery)
                && message.role == MessageRole::User
            {
                self.update_summary(&message.content, meta);
            }
        }
        self.messages.push(message);
    }

    fn update_summary(&mut self, content: &str, meta: &MessageMeta) {
        let summary = if let Some(section) = extract_section(content) {
            format!("Discussed Section {}", section)
        } else if let Some(domain) = meta.domain {
            format!("Query about {} law", domain.tag())
        } else {
            truncate_chars(content, memory::SUMMARY_CONTENT_CHARS)
        };

        if let Some(domain) = meta.domain {
            let tag = domain.tag().to_string();
            if !self.topics_discussed.contains(&tag) {
                self.topics_discussed.push(tag);
            }
        }

        self.context_summary.push(summary);
        if self.context_summary.len() > memory::MAX_SUMMARY_ENTRIES {
            let excess = self.context_summary.len() - memory::MAX_SUMMARY_ENTRIES;
            self.context_summary.drain(..excess);
        }
    }
}

/// `SessionStore` over an in-process concurrent map
#[derive(Default)]
pub struct SessionMemory {
    sessions: DashMap<String, Arc<Mutex<Session>>>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    fn session(&self, session_id: &str) -> Arc<Mutex<Session>> {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::info!(session_id, "Creating new session");
                Arc::new(Mutex::new(Session::new()))
            })
            .clone()
    }
}

impl SessionStore for SessionMemory {
    fn get_or_create(&self, session_id: &str) {
        let _ = self.session(session_id);
    }

    fn append(&self, session_id: &str, message: Message) {
        let session = self.session(session_id);
        session.lock().record(message);
    }

    fn append_exchange(
        &self,
        session_id: &str,
        user_content: &str,
        assistant_content: &str,
        meta: MessageMeta,
    ) {
        let session = self.session(session_id);
        // Both appends happen under one lock so concurrent requests can
        // never interleave halves of two exchanges.
        let mut guard = session.lock();
        guard.record(Message::new(MessageRole::User, user_content).with_metadata(meta));
        guard.record(Message::new(MessageRole::Assistant, assistant_content));
    }

    fn history(&self, session_id: &str) -> Vec<Message> {
        match self.sessions.get(session_id) {
            Some(entry) => entry.lock().messages.clone(),
            None => Vec::new(),
        }
    }

    fn context_window(&self, session_id: &str, window_size: usize) -> String {
        let Some(entry) = self.sessions.get(session_id) else {
            return String::new();
        };
        let guard = entry.lock();
        let start = guard.messages.len().saturating_sub(window_size);
        guard.messages[start..]
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    MessageRole::User => "User",
                    MessageRole::Assistant => "Assistant",
                };
                // Hard prefix cut, no ellipsis; this text feeds prompts,
                // not display.
                let content: String = msg
                    .content
                    .chars()
                    .take(memory::CONTEXT_MESSAGE_CHARS)
                    .collect();
                format!("{}: {}", role, content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn previous_user_message(&self, session_id: &str) -> Option<String> {
        let entry = self.sessions.get(session_id)?;
        let guard = entry.lock();
        let user_messages: Vec<&Message> = guard
            .messages
            .iter()
            .filter(|msg| msg.role == MessageRole::User)
            .collect();
        // The most recent user message is the turn just answered; the one
        // before it is what "what did I ask before" refers to.
        if user_messages.len() >= 2 {
            Some(user_messages[user_messages.len() - 2].content.clone())
        } else {
            None
        }
    }

    fn sidebar_summary(&self, session_id: &str) -> SidebarSummary {
        match self.sessions.get(session_id) {
            Some(entry) => {
                let guard = entry.lock();
                SidebarSummary {
                    context_summary: guard.context_summary.clone(),
                    topics_discussed: guard.topics_discussed.clone(),
                    message_count: guard.messages.len() / 2,
                    language: guard.language,
                }
            }
            None => SidebarSummary::default(),
        }
    }

    fn set_language(&self, session_id: &str, language: Language) {
        if let Some(entry) = self.sessions.get(session_id) {
            entry.lock().language = language;
        }
    }

    fn delete(&self, session_id: &str) {
        if self.sessions.remove(session_id).is_some() {
            tracing::info!(session_id, "Cleared session");
        }
    }

    fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|e| e.key().clone()).collect()
    }
}

fn extract_section(text: &str) -> Option<String> {
    SECTION_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{}...", cut)
    }
}
