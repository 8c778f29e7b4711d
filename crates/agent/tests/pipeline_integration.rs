//! End-to-end pipeline scenarios through the conversational front door.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;

use adalat_agent::{FrontDoor, Orchestrator, ResponseComposer, SessionMemory};
use adalat_core::{
    Chunk, MessageRole, Result, ScoredChunk, SessionStore, SimilaritySearch, TextGenerator,
};
use adalat_rag::{LegalRetriever, RetrieverConfig};

/// Similarity backend that counts calls, for asserting short-circuits
struct CountingSearch {
    calls: Arc<AtomicUsize>,
    hits: Vec<ScoredChunk>,
}

#[async_trait]
impl SimilaritySearch for CountingSearch {
    async fn search(&self, _query: &str, k: usize) -> Result<Vec<ScoredChunk>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.hits.iter().take(k).cloned().collect())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

struct CountingGenerator {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TextGenerator for CountingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("generated analysis".to_string())
    }

    async fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "counting"
    }
}

fn chunk_hits() -> Vec<ScoredChunk> {
    vec![
        ScoredChunk::new(
            Chunk::new("Section 302: punishment for murder", "ppc.pdf").with_page(80),
            0.2,
        ),
        ScoredChunk::new(
            Chunk::new("Section 304: culpable homicide", "ppc.pdf").with_page(82),
            0.3,
        ),
        ScoredChunk::new(
            Chunk::new("Section 420: cheating", "ppc.pdf").with_page(97),
            0.4,
        ),
    ]
}

struct Harness {
    front_door: FrontDoor,
    store: Arc<SessionMemory>,
    search_calls: Arc<AtomicUsize>,
    generator_calls: Arc<AtomicUsize>,
}

fn harness() -> Harness {
    let search_calls = Arc::new(AtomicUsize::new(0));
    let generator_calls = Arc::new(AtomicUsize::new(0));
    let retriever = LegalRetriever::new(RetrieverConfig::default()).with_backend(Arc::new(
        CountingSearch {
            calls: search_calls.clone(),
            hits: chunk_hits(),
        },
    ));
    let composer = ResponseComposer::new().with_generator(Arc::new(CountingGenerator {
        calls: generator_calls.clone(),
    }));
    let store = Arc::new(SessionMemory::new());
    let front_door = FrontDoor::new(Orchestrator::new(retriever, composer), store.clone());
    Harness {
        front_door,
        store,
        search_calls,
        generator_calls,
    }
}

#[tokio::test]
async fn casual_greeting_never_touches_backends() {
    let h = harness();
    let reply = h.front_door.handle("s1", "Hi, how are you?").await;

    assert!(reply.contains("I'm doing great"));
    assert_eq!(h.search_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.generator_calls.load(Ordering::SeqCst), 0);

    // The exchange was still recorded
    let history = h.store.history("s1");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, MessageRole::User);
    assert_eq!(history[1].role, MessageRole::Assistant);
}

#[tokio::test]
async fn legal_query_runs_retrieval_and_generation() {
    let h = harness();
    let reply = h.front_door.handle("s1", "What is the punishment for murder?").await;

    assert!(reply.contains("generated analysis"));
    assert!(reply.contains("**Query Domain:** Criminal"));
    assert!(reply.contains("**Confidence Level:** High"));
    assert!(reply.contains("1. ppc.pdf"));
    assert!(reply.contains("**Disclaimer:**"));
    assert_eq!(h.search_calls.load(Ordering::SeqCst), 1);
    // One call for analysis, one for recommendations
    assert_eq!(h.generator_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn urdu_legal_query_gets_urdu_response_scaffolding() {
    let h = harness();
    let reply = h.front_door.handle("s1", "Qatal ki saza kya hai?").await;

    assert!(reply.contains("Qanooni Tajziya aur Mashwara"));
    assert!(reply.contains("**Yaad Rahen:**"));
}

#[tokio::test]
async fn lawyer_search_preempts_pipeline() {
    let h = harness();
    let reply = h.front_door.handle("s1", "I need a lawyer in Lahore").await;

    assert!(reply.contains("Qualified Lawyers in Lahore"));
    assert!(reply.contains("Advocate Usman Malik"));
    // Directory answered before any retrieval or generation
    assert_eq!(h.search_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.generator_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn meta_question_reads_from_memory() {
    let h = harness();

    // Brand-new session
    let reply = h.front_door.handle("fresh", "what did i ask before?").await;
    assert!(reply.contains("We just started our conversation"));

    // One prior exchange: there is no question before the current one
    h.front_door.handle("one", "What is the punishment for theft?").await;
    let reply = h.front_door.handle("one", "what was my last message?").await;
    assert!(reply.contains("This is your first question"));

    // Two prior exchanges: the first query comes back verbatim
    h.front_door.handle("two", "What is the punishment for theft?").await;
    h.front_door.handle("two", "What about bail for theft?").await;
    let reply = h.front_door.handle("two", "what was my last message?").await;
    assert!(reply.contains("What is the punishment for theft?"));
}

#[tokio::test]
async fn conversation_history_meta_question_lists_transcript() {
    let h = harness();
    h.front_door.handle("s1", "What is the punishment for theft?").await;
    h.front_door.handle("s1", "What about fraud?").await;

    let reply = h.front_door.handle("s1", "show me our conversation history").await;
    assert!(reply.contains("Here's our conversation so far"));
    assert!(reply.contains("1. You: What is the punishment for theft?"));
}

#[tokio::test]
async fn unavailable_backends_produce_capability_notice() {
    let store = Arc::new(SessionMemory::new());
    let front_door = FrontDoor::new(
        Orchestrator::new(
            LegalRetriever::new(RetrieverConfig::default()),
            ResponseComposer::new(),
        ),
        store,
    );

    let reply = front_door.handle("s1", "What is the punishment for theft?").await;
    assert!(reply.contains("Legal Database Not Ready"));

    // Casual chat still works without any backends
    let reply = front_door.handle("s1", "hello").await;
    assert!(reply.contains("Legal Assistant"));
}

#[tokio::test]
async fn session_language_tracked_in_sidebar() {
    let h = harness();
    h.front_door.handle("s1", "Police ne mujhe arrest kiya, kya karun?").await;

    let summary = h.store.sidebar_summary("s1");
    assert_eq!(summary.language.code(), "ur");
    assert_eq!(summary.message_count, 1);
    assert_eq!(summary.topics_discussed, vec!["criminal"]);
}

#[tokio::test]
async fn concurrent_sessions_stay_isolated() {
    let h = harness();
    h.front_door.handle("a", "What is the punishment for theft?").await;
    h.front_door.handle("b", "hello").await;

    assert_eq!(h.store.session_count(), 2);
    assert_eq!(h.store.history("a").len(), 2);
    assert_eq!(h.store.history("b").len(), 2);
    assert!(h.store.sidebar_summary("b").topics_discussed.is_empty());
}
