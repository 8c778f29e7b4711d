//! Shared application state

use std::sync::Arc;

use adalat_agent::{FrontDoor, Orchestrator, ResponseComposer, SessionMemory};
use adalat_config::Settings;
use adalat_core::{SessionStore, SimilaritySearch};
use adalat_llm::{ChatApiBackend, LlmConfig};
use adalat_rag::{LegalRetriever, RetrieverConfig};

use crate::ServerError;

/// Handler state, cheap to clone per request
#[derive(Clone)]
pub struct AppState {
    pub front_door: Arc<FrontDoor>,
    pub store: Arc<dyn SessionStore>,
}

/// Assemble the agent stack from settings
///
/// `search_backend` is the externally built similarity index; `None`
/// runs the assistant in degraded mode (template answers, capability
/// notice for legal queries when the generator is off too).
pub fn build_state(
    settings: &Settings,
    search_backend: Option<Arc<dyn SimilaritySearch>>,
) -> Result<AppState, ServerError> {
    let mut retriever = LegalRetriever::new(RetrieverConfig::from(&settings.rag));
    if let Some(backend) = search_backend {
        tracing::info!(backend = backend.name(), "Similarity backend attached");
        retriever = retriever.with_backend(backend);
    } else {
        tracing::warn!("No similarity backend configured, retrieval disabled");
    }

    let mut composer = ResponseComposer::new();
    if settings.llm.enabled {
        let backend = ChatApiBackend::new(LlmConfig::from(&settings.llm))?;
        tracing::info!(model = %settings.llm.model, "Completion backend enabled");
        composer = composer.with_generator(Arc::new(backend));
    } else {
        tracing::info!("Completion backend disabled, template mode only");
    }

    let store: Arc<dyn SessionStore> = Arc::new(SessionMemory::new());
    let front_door = Arc::new(
        FrontDoor::new(Orchestrator::new(retriever, composer), store.clone())
            .with_context_window(settings.memory.context_window),
    );

    Ok(AppState { front_door, store })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_build_degraded_state() {
        let state = build_state(&Settings::default(), None).unwrap();
        assert_eq!(state.store.session_count(), 0);
    }

    #[test]
    fn test_llm_enabled_without_key_fails() {
        let mut settings = Settings::default();
        settings.llm.enabled = true;
        // Remote endpoint with no API key must be rejected at startup
        assert!(build_state(&settings, None).is_err());
    }
}
