//! Domain-keyword query boosting
//!
//! Biases the similarity search toward domain-relevant legal vocabulary
//! by appending a fixed keyword string to the raw query before the
//! nearest-neighbor call.

use adalat_core::Domain;

/// Appends domain-associated keywords to queries before retrieval
#[derive(Debug, Clone, Default)]
pub struct DomainBooster;

impl DomainBooster {
    pub fn new() -> Self {
        Self
    }

    /// Fixed keyword string for a domain, None for `General`
    fn keywords(domain: Domain) -> Option<&'static str> {
        match domain {
            Domain::Criminal => {
                Some("criminal law penal code PPC 302 304 murder manslaughter")
            }
            Domain::PoliceMisconduct => Some(
                "police officer misconduct assault slap beat public humiliation \
                 Pakistan Penal Code PPC 355 356 357 Police Order 2002 human rights",
            ),
            Domain::Civil => Some("civil law contract property dispute"),
            Domain::Family => Some("family law marriage divorce custody inheritance"),
            Domain::Commercial => Some("commercial law business contract trade"),
            Domain::Constitutional => Some("constitution fundamental rights"),
            Domain::General => None,
        }
    }

    /// Enhance a query with domain vocabulary
    ///
    /// No-op for `General`, which has no associated keyword set.
    pub fn enhance_query(&self, query: &str, domain: Domain) -> String {
        match Self::keywords(domain) {
            Some(keywords) => format!("{} {}", query, keywords),
            None => query.to_string(),
        }
    }
}
