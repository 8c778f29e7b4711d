//! Conversation pipeline
//!
//! A strictly ordered pipeline, not a general graph: language detection,
//! intent detection, then one branch. Casual chat is answered from fixed
//! replies without touching the index or the completion service; legal
//! queries run domain classification, retrieval, composition, lawyer
//! guidance and final assembly. Stage progression is recorded on the
//! `ConversationState` threaded through the run.

use adalat_config::constants::response;
use adalat_core::{ConversationState, Intent, Language, PipelineStage};
use adalat_rag::LegalRetriever;

use crate::classify::{DomainClassifier, IntentClassifier, LanguageDetector};
use crate::composer::ResponseComposer;
use crate::{lawyer, AgentError};

/// Sequences the classifiers, retriever and composer for one query
pub struct Orchestrator {
    language: LanguageDetector,
    intent: IntentClassifier,
    domain: DomainClassifier,
    retriever: LegalRetriever,
    composer: ResponseComposer,
}

impl Orchestrator {
    pub fn new(retriever: LegalRetriever, composer: ResponseComposer) -> Self {
        Self {
            language: LanguageDetector::default(),
            intent: IntentClassifier::new(),
            domain: DomainClassifier::new(),
            retriever,
            composer,
        }
    }

    /// Intent as the pipeline would classify it, without running anything
    pub fn detect_intent(&self, query: &str) -> Intent {
        self.intent.classify(query)
    }

    pub async fn retrieval_available(&self) -> bool {
        self.retriever.is_available().await
    }

    pub async fn generator_available(&self) -> bool {
        self.composer.generator_available().await
    }

    /// Run the full pipeline for one query
    ///
    /// Callers convert an error into a user-facing string with
    /// [`error_response`]; the pipeline result always carries a
    /// well-formed `final_response` on success.
    pub async fn respond(
        &self,
        query: &str,
        history_context: Option<&str>,
    ) -> Result<ConversationState, AgentError> {
        let mut state = ConversationState::new(query);
        if let Some(context) = history_context {
            state = state.with_history_context(context);
        }

        let language = self.language.detect(query);
        state.language = Some(language);
        state.stage = PipelineStage::LanguageDetected;
        tracing::debug!(language = %language, "Detected query language");

        let intent = self.intent.classify(query);
        state.intent = Some(intent);
        state.stage = PipelineStage::IntentDetected;
        tracing::debug!(intent = %intent, "Detected query intent");

        if intent == Intent::CasualChat {
            state.final_response = casual_reply(query, language);
            state.stage = PipelineStage::CasualHandled;
            return Ok(state);
        }

        let domain = self.domain.classify(query);
        state.domain = Some(domain);
        state.stage = PipelineStage::DomainClassified;
        tracing::debug!(domain = %domain, "Classified legal domain");

        let bundle = self.retriever.build_context_for_domain(query, domain).await;
        tracing::info!(
            found = bundle.total_docs_found,
            confidence = %bundle.confidence,
            "Retrieved legal context"
        );
        state.context = bundle.context;
        state.sources = bundle.sources;
        state.confidence = bundle.confidence;
        state.stage = PipelineStage::ContextRetrieved;

        let composed = self
            .composer
            .compose(
                query,
                domain,
                &state.context,
                language,
                state.history_context.as_deref(),
            )
            .await;
        state.analysis = composed.analysis;
        state.stage = PipelineStage::Analyzed;
        state.recommendations = composed.recommendations;
        state.stage = PipelineStage::Recommended;

        state.lawyer_guidance = lawyer::guidance(domain, language);
        state.stage = PipelineStage::LawyerAssigned;

        state.final_response = compile_response(&state, language);
        state.stage = PipelineStage::Composed;
        Ok(state)
    }
}

/// Fixed casual replies, first matching pattern wins
fn casual_reply(query: &str, language: Language) -> String {
    let lowered = query.to_lowercase();

    let reply: &str = if ["hi", "hello", "hey", "salam", "assalam"]
        .iter()
        .any(|w| lowered.contains(w))
    {
        match language {
            Language::Urdu => {
                "Salam! Main aap ka Pakistani Legal Assistant hun. Main aap ki \
                 kaise madad kar sakta hun?"
            }
            Language::English => {
                "Hello! I'm your Pakistani Legal Assistant. How can I help you today?"
            }
        }
    } else if ["how are you", "kaise ho", "kya hal"]
        .iter()
        .any(|p| lowered.contains(p))
    {
        match language {
            Language::Urdu => {
                "Main bilkul theek hun, shukriya! Main aap ka legal assistant hun \
                 aur Pakistani qanoon mein mahir hun. Kya aap ka koi legal sawal hai?"
            }
            Language::English => {
                "I'm doing great, thank you! I'm your legal assistant specialized \
                 in Pakistani Law. Do you have any legal questions?"
            }
        }
    } else if ["thanks", "thank you", "shukriya", "mehrbani"]
        .iter()
        .any(|w| lowered.contains(w))
    {
        match language {
            Language::Urdu => {
                "Aap ka swagat hai! Koi aur sawal ho to zaroor poochiye. Main \
                 yahan aap ki madad ke liye hun."
            }
            Language::English => {
                "You're most welcome! Feel free to ask any legal questions. I'm \
                 here to help you understand Pakistani law."
            }
        }
    } else if ["who are you", "what is your name", "kaun ho", "naam kya hai"]
        .iter()
        .any(|p| lowered.contains(p))
    {
        match language {
            Language::Urdu => {
                "Main aap ka Pakistani Legal Assistant hun. Main Pakistani qanoon \
                 mein mahir hun aur aap ko legal mashware aur guidance dene ke \
                 liye yahan hun. Yaad rahen, main ek AI assistant hun, wakeel \
                 nahi, lekin main aap ko Pakistani qanoon samajhne mein madad kar \
                 sakta hun."
            }
            Language::English => {
                "I'm your Pakistani Legal Assistant. I specialize in Pakistani \
                 Law and I'm here to provide legal guidance and information. \
                 Remember, I'm an AI assistant for legal research, not a lawyer, \
                 but I can help you understand Pakistani law better."
            }
        }
    } else if ["bye", "goodbye", "allah hafiz", "khuda hafiz"]
        .iter()
        .any(|w| lowered.contains(w))
    {
        match language {
            Language::Urdu => {
                "Allah Hafiz! Aap ko phir kabhi legal masail mein madad ki \
                 zaroorat ho to zaroor aaiye."
            }
            Language::English => {
                "Goodbye! Feel free to return anytime you need legal guidance. Take care!"
            }
        }
    } else {
        match language {
            Language::Urdu => {
                "Main yahan aap ki legal masail mein madad ke liye hun. Kya aap \
                 ka koi qanooni sawal hai jo main jawab de sakun?"
            }
            Language::English => {
                "I'm here to help you with legal matters. Do you have any legal \
                 questions I can assist with?"
            }
        }
    };
    reply.to_string()
}

/// Assemble the final multi-section response in the detected language
fn compile_response(state: &ConversationState, language: Language) -> String {
    let domain = state.domain.unwrap_or_default();

    let mut out = match language {
        Language::Urdu => format!(
            "**Qanooni Tajziya aur Mashwara**\n\n\
             **Sawal ka Domain:** {}\n\
             **Yaqeen ka Daraja:** {}\n\n\
             {}\n\n{}\n\n{}\n\n**Mazeed Maloomat:**\n",
            domain.title(),
            state.confidence.title(),
            state.analysis,
            state.recommendations,
            state.lawyer_guidance,
        ),
        Language::English => format!(
            "**Legal Analysis & Advice**\n\n\
             **Query Domain:** {}\n\
             **Confidence Level:** {}\n\n\
             {}\n\n{}\n\n{}\n\n**Sources:**\n",
            domain.title(),
            state.confidence.title(),
            state.analysis,
            state.recommendations,
            state.lawyer_guidance,
        ),
    };

    if !state.sources.is_empty() {
        out.push_str(match language {
            Language::Urdu => "\nYeh maloomat in qanooni dastavezat par mabni hai:\n",
            Language::English => "\nBased on the following legal documents:\n",
        });
        for (i, source) in state
            .sources
            .iter()
            .take(response::MAX_CITED_SOURCES)
            .enumerate()
        {
            out.push_str(&format!("{}. {}\n", i + 1, source.source_file));
        }
    }

    out.push_str(match language {
        Language::Urdu => {
            "\n\n---\n\
             **Disclaimer:** Yeh abtedai qanooni rahnumai hai jo mojuda qanooni \
             dastavezat par mabni hai. Kisi bhi makhsoos qanooni masle ke liye \
             hamesha kisi qualified Pakistani wakeel se mashwara karen.\n\n\
             **Yaad Rahen:** Main ek AI assistant hun, wakeel nahi. Professional \
             legal advice ke liye hamesha kisi qualified wakeel se raabta karen."
        }
        Language::English => {
            "\n\n---\n\
             **Disclaimer:** This is preliminary legal guidance based on \
             available legal documents. Always consult with a qualified \
             Pakistani lawyer for specific legal advice.\n\n\
             **Remember:** I am an AI assistant for legal research and guidance, \
             not a lawyer. For serious legal matters, always seek professional \
             legal counsel."
        }
    });

    out
}

/// Bilingual pipeline-failure string, best-effort in the detected language
pub fn error_response(language: Language) -> String {
    match language {
        Language::Urdu => {
            "Khata: Aap ke sawal ko process karne mein masla hua. Mehrbani karke \
             dobara koshish karen ya apna sawal mukhtalif alfaz mein likhen."
                .to_string()
        }
        Language::English => {
            "I encountered an error processing your legal question. Please try \
             rephrasing or contact support."
                .to_string()
        }
    }
}
