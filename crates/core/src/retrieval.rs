//! Retrieval types
//!
//! The similarity index itself is an external collaborator; these types
//! describe what crosses that boundary and what the retriever derives
//! from it.

use serde::{Deserialize, Serialize};

/// A retrievable unit of document text with source provenance
///
/// Produced by the external document-ingestion pipeline and returned by
/// the similarity search service. The core only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk text content
    pub content: String,
    /// Source document file name
    pub source_file: String,
    /// Page number within the source, when known
    pub page: Option<u32>,
}

impl Chunk {
    pub fn new(content: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source_file: source_file.into(),
            page: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// A chunk paired with its similarity distance
///
/// Distance semantics: lower is more similar. The backend returns hits
/// ordered best-to-worst (lowest distance first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub distance: f32,
}

impl ScoredChunk {
    pub fn new(chunk: Chunk, distance: f32) -> Self {
        Self { chunk, distance }
    }
}

/// Coarse retrieval-quality estimate derived from result count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Map a chunk count to a confidence level: 0 -> low, 1-2 -> medium,
    /// 3+ -> high
    pub fn from_chunk_count(count: usize) -> Self {
        match count {
            0 => Self::Low,
            1..=2 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Provenance entry for one included chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    pub source_file: String,
    pub page: Option<u32>,
    /// First characters of the chunk text, for display
    pub preview: String,
}

/// Assembled retrieval context for one query
///
/// Built fresh per query from a list of chunks; never mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextBundle {
    /// Concatenated chunk texts, separator-joined, bounded by the
    /// configured character budget
    pub context: String,
    /// Provenance for the chunks actually included in `context`
    pub sources: Vec<SourceRef>,
    /// Confidence derived from the number of included chunks
    pub confidence: Confidence,
    /// Number of chunks the backend returned, before the character
    /// budget was applied
    pub total_docs_found: usize,
}

impl ContextBundle {
    /// Bundle representing "the index returned nothing"
    pub fn empty(marker: impl Into<String>) -> Self {
        Self {
            context: marker.into(),
            sources: Vec::new(),
            confidence: Confidence::Low,
            total_docs_found: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_from_count() {
        assert_eq!(Confidence::from_chunk_count(0), Confidence::Low);
        assert_eq!(Confidence::from_chunk_count(1), Confidence::Medium);
        assert_eq!(Confidence::from_chunk_count(2), Confidence::Medium);
        assert_eq!(Confidence::from_chunk_count(3), Confidence::High);
        assert_eq!(Confidence::from_chunk_count(10), Confidence::High);
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
    }

    #[test]
    fn test_chunk_builder() {
        let chunk = Chunk::new("Section 420 deals with cheating", "ppc.pdf").with_page(97);
        assert_eq!(chunk.page, Some(97));
        assert_eq!(chunk.source_file, "ppc.pdf");
    }

    #[test]
    fn test_empty_bundle() {
        let bundle = ContextBundle::empty("No relevant legal documents found");
        assert_eq!(bundle.confidence, Confidence::Low);
        assert_eq!(bundle.total_docs_found, 0);
        assert!(bundle.sources.is_empty());
    }
}
