//! Legal document retriever
//!
//! Bridges the raw external nearest-neighbor search and a usable
//! answer-generation context.

use std::sync::Arc;

use adalat_config::constants::retrieval;
use adalat_core::{Chunk, Confidence, ContextBundle, Domain, SimilaritySearch, SourceRef};

use crate::domain_boost::DomainBooster;

/// Retriever configuration
#[derive(Debug, Clone)]
pub struct RetrieverConfig {
    /// Chunks requested from the backend per query
    pub top_k: usize,
    /// Character budget for the assembled context
    pub max_context_chars: usize,
    /// Distance threshold (lower distance is more similar); chunks
    /// farther than this are dropped. None disables filtering.
    pub score_threshold: Option<f32>,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            top_k: retrieval::DEFAULT_TOP_K,
            max_context_chars: retrieval::DEFAULT_MAX_CONTEXT_CHARS,
            score_threshold: None,
        }
    }
}

impl From<&adalat_config::RagSettings> for RetrieverConfig {
    fn from(settings: &adalat_config::RagSettings) -> Self {
        Self {
            top_k: settings.top_k,
            max_context_chars: settings.max_context_chars,
            score_threshold: settings.score_threshold,
        }
    }
}

/// Retriever over the external similarity index
///
/// Constructed with or without a backend; without one, every retrieval
/// is a valid zero-result outcome rather than an error.
pub struct LegalRetriever {
    config: RetrieverConfig,
    backend: Option<Arc<dyn SimilaritySearch>>,
    booster: DomainBooster,
}

impl LegalRetriever {
    pub fn new(config: RetrieverConfig) -> Self {
        Self {
            config,
            backend: None,
            booster: DomainBooster::new(),
        }
    }

    /// Set the similarity backend
    pub fn with_backend(mut self, backend: Arc<dyn SimilaritySearch>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    /// Whether a searchable index is attached
    pub async fn is_available(&self) -> bool {
        match &self.backend {
            Some(backend) => backend.is_available().await,
            None => false,
        }
    }

    /// Retrieve the top-`k` chunks for a query
    ///
    /// Preserves the backend's similarity ranking. A missing backend or a
    /// failed search yields an empty sequence; callers treat that as a
    /// low-confidence outcome, not an error.
    pub async fn retrieve(&self, query: &str, k: usize, score_threshold: Option<f32>) -> Vec<Chunk> {
        let backend = match &self.backend {
            Some(backend) => backend,
            None => {
                tracing::warn!("No similarity backend configured, returning no results");
                return Vec::new();
            }
        };

        let hits = match backend.search(query, k).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(error = %e, "Similarity search failed, treating as no results");
                return Vec::new();
            }
        };

        let chunks: Vec<Chunk> = hits
            .into_iter()
            .filter(|hit| match score_threshold {
                Some(threshold) => hit.distance <= threshold,
                None => true,
            })
            .map(|hit| hit.chunk)
            .collect();

        tracing::debug!(
            query = %truncate_for_log(query),
            count = chunks.len(),
            "Retrieved relevant documents"
        );
        chunks
    }

    /// Build context with the query enhanced by domain keywords first
    pub async fn build_context_for_domain(&self, query: &str, domain: Domain) -> ContextBundle {
        let enhanced = self.booster.enhance_query(query, domain);
        self.build_context(&enhanced).await
    }

    /// Build the structured context for answer generation
    ///
    /// Retrieves `top_k` chunks, then concatenates chunk texts (separator
    /// between each) until appending the next whole chunk would exceed
    /// `max_context_chars`; no partial chunk is ever included.
    ///
    /// `total_docs_found` counts retrieved (pre-truncation) chunks;
    /// `confidence` counts included chunks, so a zero character budget
    /// reports `low` even when the index returned hits.
    pub async fn build_context(&self, query: &str) -> ContextBundle {
        let chunks = self
            .retrieve(query, self.config.top_k, self.config.score_threshold)
            .await;

        if chunks.is_empty() {
            return ContextBundle::empty(retrieval::NO_DOCUMENTS_MARKER);
        }

        let total_docs_found = chunks.len();
        let mut parts: Vec<&str> = Vec::new();
        let mut sources: Vec<SourceRef> = Vec::new();
        let mut current_len = 0usize;

        for chunk in &chunks {
            let text = chunk.content.trim();
            if text.is_empty() {
                continue;
            }
            // Separator cost applies from the second chunk onward
            let added = if parts.is_empty() {
                text.len()
            } else {
                retrieval::CONTEXT_SEPARATOR.len() + text.len()
            };
            if current_len + added > self.config.max_context_chars {
                break;
            }

            parts.push(text);
            sources.push(SourceRef {
                source_file: chunk.source_file.clone(),
                page: chunk.page,
                preview: preview_of(text),
            });
            current_len += added;
        }

        let confidence = Confidence::from_chunk_count(sources.len());
        tracing::debug!(
            included = sources.len(),
            found = total_docs_found,
            confidence = %confidence,
            "Assembled retrieval context"
        );

        ContextBundle {
            context: parts.join(retrieval::CONTEXT_SEPARATOR),
            sources,
            confidence,
            total_docs_found,
        }
    }
}

/// Char-boundary-safe preview of chunk text
fn preview_of(text: &str) -> String {
    if text.chars().count() <= retrieval::PREVIEW_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(retrieval::PREVIEW_CHARS).collect();
        format!("{}...", cut)
    }
}

fn truncate_for_log(query: &str) -> String {
    query.chars().take(50).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adalat_core::{Result, ScoredChunk};
    use async_trait::async_trait;

    struct FixedSearch {
        hits: Vec<ScoredChunk>,
    }

    #[async_trait]
    impl SimilaritySearch for FixedSearch {
        async fn search(&self, _query: &str, k: usize) -> Result<Vec<ScoredChunk>> {
            Ok(self.hits.iter().take(k).cloned().collect())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingSearch;

    #[async_trait]
    impl SimilaritySearch for FailingSearch {
        async fn search(&self, _query: &str, _k: usize) -> Result<Vec<ScoredChunk>> {
            Err(adalat_core::Error::Retrieval("index offline".to_string()))
        }

        async fn is_available(&self) -> bool {
            false
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn hit(content: &str, file: &str, distance: f32) -> ScoredChunk {
        ScoredChunk::new(Chunk::new(content, file), distance)
    }

    fn retriever_with(hits: Vec<ScoredChunk>, config: RetrieverConfig) -> LegalRetriever {
        LegalRetriever::new(config).with_backend(Arc::new(FixedSearch { hits }))
    }

    #[tokio::test]
    async fn test_no_backend_returns_empty() {
        let retriever = LegalRetriever::new(RetrieverConfig::default());
        assert!(retriever.retrieve("theft", 5, None).await.is_empty());
        assert!(!retriever.is_available().await);
    }

    #[tokio::test]
    async fn test_search_failure_is_empty_not_error() {
        let retriever =
            LegalRetriever::new(RetrieverConfig::default()).with_backend(Arc::new(FailingSearch));
        assert!(retriever.retrieve("theft", 5, None).await.is_empty());

        let bundle = retriever.build_context("theft").await;
        assert_eq!(bundle.confidence, Confidence::Low);
        assert_eq!(bundle.context, retrieval::NO_DOCUMENTS_MARKER);
    }

    #[tokio::test]
    async fn test_threshold_filters_distant_chunks() {
        let retriever = retriever_with(
            vec![
                hit("close match", "ppc.pdf", 0.2),
                hit("far match", "ppc.pdf", 0.9),
            ],
            RetrieverConfig::default(),
        );

        let chunks = retriever.retrieve("q", 5, Some(0.5)).await;
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "close match");
    }

    #[tokio::test]
    async fn test_ranking_order_preserved() {
        let retriever = retriever_with(
            vec![
                hit("first", "a.pdf", 0.1),
                hit("second", "b.pdf", 0.2),
                hit("third", "c.pdf", 0.3),
            ],
            RetrieverConfig::default(),
        );

        let chunks = retriever.retrieve("q", 5, None).await;
        let contents: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_build_context_confidence_levels() {
        for (count, expected) in [(0, Confidence::Low), (2, Confidence::Medium), (3, Confidence::High)] {
            let hits = (0..count)
                .map(|i| hit(&format!("chunk {}", i), "law.pdf", 0.1))
                .collect();
            let retriever = retriever_with(hits, RetrieverConfig::default());
            let bundle = retriever.build_context("q").await;
            assert_eq!(bundle.confidence, expected, "count {}", count);
        }
    }

    #[tokio::test]
    async fn test_build_context_respects_budget_without_partial_chunks() {
        let config = RetrieverConfig {
            max_context_chars: 25,
            ..Default::default()
        };
        // 10 chars each; second chunk costs separator (7) + 10 = 17, so
        // only the first fits in 25.
        let retriever = retriever_with(
            vec![hit("aaaaaaaaaa", "a.pdf", 0.1), hit("bbbbbbbbbb", "b.pdf", 0.2)],
            config,
        );

        let bundle = retriever.build_context("q").await;
        assert_eq!(bundle.sources.len(), 1);
        assert_eq!(bundle.context, "aaaaaaaaaa");
        assert_eq!(bundle.total_docs_found, 2);
    }

    #[tokio::test]
    async fn test_build_context_zero_budget_is_low_confidence() {
        let config = RetrieverConfig {
            max_context_chars: 0,
            ..Default::default()
        };
        let retriever = retriever_with(
            vec![
                hit("one", "a.pdf", 0.1),
                hit("two", "b.pdf", 0.2),
                hit("three", "c.pdf", 0.3),
            ],
            config,
        );

        let bundle = retriever.build_context("q").await;
        assert!(bundle.context.is_empty());
        assert!(bundle.sources.is_empty());
        assert_eq!(bundle.confidence, Confidence::Low);
        // total_docs_found still reflects the pre-truncation count
        assert_eq!(bundle.total_docs_found, 3);
    }

    #[tokio::test]
    async fn test_build_context_separator_and_previews() {
        let long_text = "x".repeat(150);
        let retriever = retriever_with(
            vec![hit("short chunk", "a.pdf", 0.1), hit(&long_text, "b.pdf", 0.2)],
            RetrieverConfig::default(),
        );

        let bundle = retriever.build_context("q").await;
        assert!(bundle.context.contains("\n\n---\n\n"));
        assert_eq!(bundle.sources[0].preview, "short chunk");
        assert!(bundle.sources[1].preview.ends_with("..."));
        assert_eq!(bundle.sources[1].preview.chars().count(), 103);
    }
}
