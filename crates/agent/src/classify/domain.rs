//! Legal-domain classification
//!
//! Counts per-domain keyword hits as substrings of the lowered query and
//! picks the highest-scoring domain. Ties resolve to the first domain in
//! table order, which is a fixed, documented contract: criminal,
//! police_misconduct, civil, family, commercial, constitutional.

use adalat_core::Domain;

/// Keyword table, iterated in priority order for tie-breaking
const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Criminal,
        &[
            "crime", "criminal", "theft", "murder", "assault", "fraud", "punishment", "jail",
            "prison", "police", "arrest", "bail", "penal code", "offense", "robbery",
            "kidnapping", "shot", "shooting", "accidental", "underground", "surrender", "fir",
            "investigation", "homicide", "manslaughter", "weapon", "firearm",
        ],
    ),
    (
        Domain::PoliceMisconduct,
        &[
            "police", "officer", "cop", "slap", "beat", "harass", "misconduct", "abuse",
            "brutality", "assault", "public", "humiliate", "rights", "complaint",
            "police station", "uniform", "authority",
        ],
    ),
    (
        Domain::Civil,
        &[
            "contract", "property", "land", "dispute", "damages", "compensation", "breach",
            "agreement", "civil suit", "tort", "negligence", "liability",
        ],
    ),
    (
        Domain::Family,
        &[
            "marriage", "divorce", "custody", "inheritance", "family", "spouse", "children",
            "will", "property inheritance", "maintenance", "alimony", "nikah", "khula", "mahr",
            "second marriage", "multiple wives", "polygamy", "permission", "first wife",
            "husband", "wife", "marriage contract", "muslim family law",
            "family laws ordinance",
        ],
    ),
    (
        Domain::Commercial,
        &[
            "business", "trade", "commercial", "company", "corporate", "contract", "agreement",
            "partnership", "liability", "investment", "shares", "stock", "merger",
            "acquisition",
        ],
    ),
    (
        Domain::Constitutional,
        &[
            "constitution", "fundamental rights", "freedom", "equality", "discrimination",
            "citizen", "state", "government", "law", "judiciary", "parliament", "amendment",
        ],
    ),
];

/// Scores a legal query against the per-domain keyword table
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainClassifier;

impl DomainClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, query: &str) -> Domain {
        let lowered = query.to_lowercase();

        let mut best = Domain::General;
        let mut best_score = 0usize;
        for (domain, keywords) in DOMAIN_KEYWORDS {
            let score = keywords
                .iter()
                .filter(|keyword| lowered.contains(*keyword))
                .count();
            if score > best_score {
                best = *domain;
                best_score = score;
            }
        }
        best
    }
}
