//! Language definitions
//!
//! The assistant is bilingual: English and Urdu. Urdu covers both the
//! native Perso-Arabic script and romanized ("Roman Urdu") text.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Urdu,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Urdu => "ur",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Urdu => "Urdu",
        }
    }

    /// Check whether a character falls in the Arabic Unicode block used
    /// by Urdu script (U+0600 - U+06FF)
    pub fn is_urdu_script_char(c: char) -> bool {
        ('\u{0600}'..='\u{06FF}').contains(&c)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::English => "english",
            Self::Urdu => "urdu",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Urdu.code(), "ur");
    }

    #[test]
    fn test_urdu_script_detection() {
        assert!(Language::is_urdu_script_char('ق'));
        assert!(Language::is_urdu_script_char('ا'));
        assert!(!Language::is_urdu_script_char('q'));
        assert!(!Language::is_urdu_script_char('3'));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Language::Urdu).unwrap();
        assert_eq!(json, "\"urdu\"");
    }
}
