//! Legal domain and query intent classifications

use serde::{Deserialize, Serialize};

/// Legal subject-matter category
///
/// Used to route retrieval enhancement, template selection and lawyer
/// recommendations. `General` is the fallback when no domain signal
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Criminal,
    PoliceMisconduct,
    Civil,
    Family,
    Commercial,
    Constitutional,
    #[default]
    General,
}

impl Domain {
    /// Lower-case tag used in logs and API payloads
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Criminal => "criminal",
            Self::PoliceMisconduct => "police_misconduct",
            Self::Civil => "civil",
            Self::Family => "family",
            Self::Commercial => "commercial",
            Self::Constitutional => "constitutional",
            Self::General => "general",
        }
    }

    /// Title-case name for user-facing response headers
    pub fn title(&self) -> &'static str {
        match self {
            Self::Criminal => "Criminal",
            Self::PoliceMisconduct => "Police Misconduct",
            Self::Civil => "Civil",
            Self::Family => "Family",
            Self::Commercial => "Commercial",
            Self::Constitutional => "Constitutional",
            Self::General => "General",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Coarse query intent
///
/// Casual chat short-circuits the pipeline before any retrieval or
/// generation work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CasualChat,
    LegalQuery,
}

impl Intent {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::CasualChat => "casual_chat",
            Self::LegalQuery => "legal_query",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_tags() {
        assert_eq!(Domain::PoliceMisconduct.tag(), "police_misconduct");
        assert_eq!(Domain::default(), Domain::General);
    }

    #[test]
    fn test_intent_serde() {
        let json = serde_json::to_string(&Intent::LegalQuery).unwrap();
        assert_eq!(json, "\"legal_query\"");
    }
}
