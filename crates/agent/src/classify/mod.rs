//! Query classifiers
//!
//! All three classifiers are total: they always return a value, falling
//! back to the most general bucket (`English`, `LegalQuery`, `General`)
//! when no signal matches.

mod domain;
mod intent;
mod language;

pub use domain::DomainClassifier;
pub use intent::IntentClassifier;
pub use language::{DetectionPolicy, LanguageDetector};
