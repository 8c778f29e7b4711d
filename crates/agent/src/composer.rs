//! Response composition
//!
//! Produces the analysis and recommendations blocks. When a completion
//! service is attached it is tried first; any failure degrades that one
//! call to template mode. Composition itself never fails.

use std::sync::Arc;

use adalat_core::{Domain, Language, TextGenerator};
use adalat_llm::PromptBuilder;

use crate::templates;

/// Structured composition output
///
/// Citations are carried separately on the context bundle; downstream
/// code never re-parses these blocks for markers.
#[derive(Debug, Clone)]
pub struct ComposedResponse {
    pub analysis: String,
    pub recommendations: String,
}

/// Composes analysis and recommendations, LLM-first with template fallback
pub struct ResponseComposer {
    generator: Option<Arc<dyn TextGenerator>>,
    prompts: PromptBuilder,
}

impl ResponseComposer {
    pub fn new() -> Self {
        Self {
            generator: None,
            prompts: PromptBuilder::new(),
        }
    }

    /// Attach a completion service
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Whether a completion service is attached and reachable
    pub async fn generator_available(&self) -> bool {
        match &self.generator {
            Some(generator) => generator.is_available().await,
            None => false,
        }
    }

    pub async fn compose(
        &self,
        query: &str,
        domain: Domain,
        context: &str,
        language: Language,
        history: Option<&str>,
    ) -> ComposedResponse {
        let analysis = self.analysis(query, domain, context, language, history).await;
        let recommendations = self
            .recommendations(query, domain, &analysis, language)
            .await;
        ComposedResponse {
            analysis,
            recommendations,
        }
    }

    async fn analysis(
        &self,
        query: &str,
        domain: Domain,
        context: &str,
        language: Language,
        history: Option<&str>,
    ) -> String {
        if let Some(generator) = &self.generator {
            let prompt = self
                .prompts
                .analysis_prompt(query, domain, context, language, history);
            match generator.generate(&prompt).await {
                Ok(text) => return text,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        backend = generator.name(),
                        "Analysis generation failed, using template"
                    );
                }
            }
        }
        templates::analysis(domain, language)
    }

    async fn recommendations(
        &self,
        query: &str,
        domain: Domain,
        analysis: &str,
        language: Language,
    ) -> String {
        if let Some(generator) = &self.generator {
            let prompt = self
                .prompts
                .recommendations_prompt(query, domain, analysis, language);
            match generator.generate(&prompt).await {
                Ok(text) => return text,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        backend = generator.name(),
                        "Recommendations generation failed, using template"
                    );
                }
            }
        }
        templates::recommendations(domain, language)
    }
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adalat_core::Result;
    use async_trait::async_trait;

    struct FixedGenerator {
        reply: String,
    }

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.reply.clone())
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(adalat_core::Error::Generation("service down".to_string()))
        }

        async fn is_available(&self) -> bool {
            false
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_no_generator_uses_templates() {
        let composer = ResponseComposer::new();
        let response = composer
            .compose("divorce process", Domain::Family, "", Language::English, None)
            .await;
        assert!(response.analysis.contains("Pakistani family law"));
        assert!(response.recommendations.contains("Actionable Recommendations"));
        assert!(!composer.generator_available().await);
    }

    #[tokio::test]
    async fn test_generator_output_used_when_available() {
        let composer = ResponseComposer::new().with_generator(Arc::new(FixedGenerator {
            reply: "generated text".to_string(),
        }));
        let response = composer
            .compose("section 420", Domain::Criminal, "ctx", Language::English, None)
            .await;
        assert_eq!(response.analysis, "generated text");
        assert_eq!(response.recommendations, "generated text");
    }

    #[tokio::test]
    async fn test_generator_failure_degrades_to_template() {
        let composer = ResponseComposer::new().with_generator(Arc::new(FailingGenerator));
        let response = composer
            .compose("section 420", Domain::Criminal, "ctx", Language::English, None)
            .await;
        assert!(response.analysis.contains("Pakistan Penal Code 1860"));
        assert!(response.recommendations.contains("Actionable Recommendations"));
    }
}
