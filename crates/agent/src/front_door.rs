//! Conversational front door
//!
//! Everything that runs before the pipeline, in a fixed priority order:
//! meta-questions about the conversation, canned replies (an ordered
//! rule list, first match wins), the lawyer directory, then the
//! orchestrator itself. Every turn, whichever path answered it, is
//! recorded in session memory as a paired exchange.

use std::sync::Arc;

use adalat_config::constants::memory;
use adalat_core::{Intent, Language, MessageMeta, MessageRole, SessionStore};

use crate::classify::{DetectionPolicy, LanguageDetector};
use crate::directory::LawyerDirectory;
use crate::orchestrator::{self, Orchestrator};

const META_QUESTION_PHRASES: &[&str] = &[
    "what was my last message",
    "what did i ask",
    "what was my previous question",
    "what did i say before",
    "my last query",
    "my previous message",
    "what was our conversation",
    "conversation history",
    "chat history",
];

/// One canned-reply rule; rules are evaluated in declaration order
struct CannedRule {
    name: &'static str,
    matches: fn(&str) -> bool,
    reply: fn(Language) -> &'static str,
}

/// Priority order: greeting, how-are-you, identity, thanks
const CANNED_RULES: &[CannedRule] = &[
    CannedRule {
        name: "greeting",
        matches: |lowered| {
            const GREETINGS: &[&str] = &[
                "hi", "hello", "hey", "salam", "assalam", "good morning", "good evening",
            ];
            lowered.len() < 25
                && GREETINGS.iter().any(|g| {
                    lowered == *g || lowered.split_whitespace().any(|token| token == *g)
                })
        },
        reply: |language| match language {
            Language::Urdu => "Salam! Main aap ka Legal Assistant hun. Kya koi qanooni sawal hai?",
            Language::English => {
                "Hello! I'm your Legal Assistant for Pakistani law. What can I \
                 help you with today?"
            }
        },
    },
    CannedRule {
        name: "how_are_you",
        matches: |lowered| {
            ["how are you", "kaise ho", "kya hal"]
                .iter()
                .any(|p| lowered.contains(p))
        },
        reply: |language| match language {
            Language::Urdu => {
                "Main bilkul theek hun, shukria! Main Pakistani qanoon mein aap \
                 ki madad ke liye tayyar hun. Kya puchna chahte hain?"
            }
            Language::English => {
                "I'm doing great, thank you! I'm ready to help you with Pakistani \
                 law. What would you like to know?"
            }
        },
    },
    CannedRule {
        name: "identity",
        matches: |lowered| {
            ["who are you", "what are you", "kaun ho"]
                .iter()
                .any(|p| lowered.contains(p))
        },
        reply: |language| match language {
            Language::Urdu => {
                "Main aap ka AI Legal Assistant hun - Pakistani qanoon mein \
                 mahir. Main Constitution, Penal Code, aur doosre legal acts ke \
                 baare mein aap ki madad kar sakta hun."
            }
            Language::English => {
                "I'm your AI Legal Assistant specialized in Pakistani law. I can \
                 help you understand the Constitution, Penal Code, and various \
                 legal matters in Pakistan."
            }
        },
    },
    CannedRule {
        name: "thanks",
        matches: |lowered| {
            lowered.len() < 30
                && ["thank you", "thanks", "shukria"]
                    .iter()
                    .any(|t| lowered.contains(t))
        },
        reply: |language| match language {
            Language::Urdu => "Koi baat nahi! Agar koi aur sawal ho to zaroor puchiye.",
            Language::English => {
                "You're welcome! Feel free to ask if you have any other questions."
            }
        },
    },
];

/// Session-aware entry point ahead of the pipeline
pub struct FrontDoor {
    orchestrator: Orchestrator,
    store: Arc<dyn SessionStore>,
    directory: LawyerDirectory,
    detector: LanguageDetector,
    context_window: usize,
}

impl FrontDoor {
    pub fn new(orchestrator: Orchestrator, store: Arc<dyn SessionStore>) -> Self {
        Self {
            orchestrator,
            store,
            directory: LawyerDirectory::new(),
            // Ratio policy: single borrowed Urdu words in otherwise-English
            // greetings should not flip the reply language
            detector: LanguageDetector::new(DetectionPolicy::TokenRatio),
            context_window: memory::DEFAULT_CONTEXT_WINDOW,
        }
    }

    /// How many recent messages feed the pipeline's history context
    pub fn with_context_window(mut self, window_size: usize) -> Self {
        self.context_window = window_size;
        self
    }

    pub async fn retrieval_available(&self) -> bool {
        self.orchestrator.retrieval_available().await
    }

    pub async fn generator_available(&self) -> bool {
        self.orchestrator.generator_available().await
    }

    /// Answer one query, recording the exchange in session memory
    pub async fn handle(&self, session_id: &str, query: &str) -> String {
        self.store.get_or_create(session_id);
        let lowered = query.to_lowercase().trim().to_string();

        if let Some(reply) = self.answer_meta_question(session_id, &lowered) {
            self.record(session_id, query, &reply, MessageMeta::casual());
            return reply;
        }

        let language = self.detector.detect(query);
        for rule in CANNED_RULES {
            if (rule.matches)(&lowered) {
                tracing::debug!(rule = rule.name, "Canned reply matched");
                self.store.set_language(session_id, language);
                let reply = (rule.reply)(language).to_string();
                self.record(session_id, query, &reply, MessageMeta::casual());
                return reply;
            }
        }

        if let Some(listing) = self.directory.search(query) {
            tracing::debug!("Lawyer directory handled query");
            self.record(session_id, query, &listing, MessageMeta::casual());
            return listing;
        }

        if self.orchestrator.detect_intent(query) == Intent::LegalQuery
            && !self.retrieval_available().await
            && !self.generator_available().await
        {
            tracing::warn!("No retrieval backend or generator configured");
            let notice = unavailable_notice();
            self.record(session_id, query, &notice, MessageMeta::default());
            return notice;
        }

        let context = self.store.context_window(session_id, self.context_window);
        let context = (!context.is_empty()).then_some(context.as_str());

        match self.orchestrator.respond(query, context).await {
            Ok(state) => {
                let language = state.language_or_default();
                self.store.set_language(session_id, language);
                let meta = match state.intent {
                    Some(Intent::CasualChat) => MessageMeta::casual(),
                    _ => MessageMeta::legal(state.domain.unwrap_or_default()),
                };
                self.record(session_id, query, &state.final_response, meta);
                state.final_response
            }
            Err(e) => {
                tracing::error!(error = %e, "Pipeline failed");
                let reply = orchestrator::error_response(language);
                self.record(session_id, query, &reply, MessageMeta::default());
                reply
            }
        }
    }

    /// Answer "what did I ask before" style questions from the log
    fn answer_meta_question(&self, session_id: &str, lowered: &str) -> Option<String> {
        if !META_QUESTION_PHRASES.iter().any(|p| lowered.contains(p)) {
            return None;
        }

        let history = self.store.history(session_id);
        if history.len() < 2 {
            return Some(
                "We just started our conversation! You haven't asked anything \
                 yet. How can I help you with Pakistani law?"
                    .to_string(),
            );
        }

        if lowered.contains("conversation") || lowered.contains("history") {
            if history.len() <= 2 {
                return Some(
                    "We just started chatting! Ask me anything about Pakistani law.".to_string(),
                );
            }
            let mut summary = String::from("Here's our conversation so far:\n\n");
            for (i, msg) in history.iter().enumerate() {
                let role = match msg.role {
                    MessageRole::User => "You",
                    MessageRole::Assistant => "Me",
                };
                summary.push_str(&format!(
                    "{}. {}: {}\n",
                    i + 1,
                    role,
                    truncate_chars(&msg.content, 100)
                ));
            }
            summary.push_str("\nWhat else would you like to know?");
            return Some(summary);
        }

        match self.store.previous_user_message(session_id) {
            Some(previous) => Some(format!(
                "Your last message was: \"{}\"\n\nWould you like me to provide \
                 more details about that topic?",
                previous
            )),
            None => Some("This is your first question in our conversation!".to_string()),
        }
    }

    fn record(&self, session_id: &str, query: &str, reply: &str, meta: MessageMeta) {
        self.store.append_exchange(session_id, query, reply, meta);
    }
}

/// Capability notice when neither an index nor a generator is configured
fn unavailable_notice() -> String {
    "**Legal Database Not Ready**\n\n\
     The legal document index hasn't been connected yet, so I can't answer \
     detailed legal questions right now.\n\n\
     **I can still help with:**\n\
     - General legal information\n\
     - Finding lawyers in your city\n\
     - Understanding legal procedures"
        .to_string()
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{}...", cut)
    }
}
