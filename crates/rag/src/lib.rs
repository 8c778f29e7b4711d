//! Similarity retrieval over the legal document index
//!
//! Features:
//! - Trait-backed similarity search (the index itself is external)
//! - Distance-threshold filtering with rank preservation
//! - Domain-keyword query boosting
//! - Context assembly with a character budget, provenance list and
//!   count-derived confidence scoring
//!
//! An absent or unavailable index is a valid low-confidence outcome, not
//! an error: callers always get a well-formed `ContextBundle`.

pub mod domain_boost;
pub mod retriever;

pub use domain_boost::DomainBooster;
pub use retriever::{LegalRetriever, RetrieverConfig};
