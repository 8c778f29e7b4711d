//! Language detection
//!
//! Urdu arrives either in native script or romanized. Script detection is
//! unambiguous and always wins; romanized Urdu is recognized by marker
//! words (common pronouns, postpositions and auxiliaries that rarely
//! appear in English text).

use adalat_config::constants::intent;
use adalat_core::Language;

/// Roman-Urdu function words; an exact token match flags the query as Urdu
const ROMAN_URDU_MARKERS: &[&str] = &[
    "kya", "hai", "mein", "ka", "ki", "ko", "se", "aap", "main", "hun", "thi", "tha", "hain",
    "hoon", "kaise", "kyun", "aur", "ya",
];

/// Broader word list for the token-ratio policy
const RATIO_WORDS: &[&str] = &[
    "kya", "hai", "ho", "hain", "ka", "ki", "ke", "mein", "se", "ko", "aap", "main", "hum",
    "kaun", "kaise", "kahan", "kab", "kyun", "shukria", "dhanyawad", "salam",
];

/// Roman-Urdu recognition policy
///
/// Script detection applies under both policies; they differ only in how
/// romanized text is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionPolicy {
    /// Any marker-word token match means Urdu
    #[default]
    MarkerWords,
    /// Urdu when the fraction of marker tokens exceeds 0.3; used at the
    /// conversational front door where single borrowed words ("salam
    /// everyone, quick question about contracts") should not flip an
    /// otherwise-English query
    TokenRatio,
}

/// Classifies a query as English or Urdu
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetector {
    policy: DetectionPolicy,
}

impl LanguageDetector {
    pub fn new(policy: DetectionPolicy) -> Self {
        Self { policy }
    }

    pub fn detect(&self, query: &str) -> Language {
        if query.chars().any(Language::is_urdu_script_char) {
            return Language::Urdu;
        }

        let lowered = query.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        if tokens.is_empty() {
            return Language::English;
        }

        let is_urdu = match self.policy {
            DetectionPolicy::MarkerWords => tokens
                .iter()
                .any(|token| ROMAN_URDU_MARKERS.contains(token)),
            DetectionPolicy::TokenRatio => {
                let matches = tokens
                    .iter()
                    .filter(|token| RATIO_WORDS.contains(*token))
                    .count();
                matches as f32 / tokens.len() as f32 > intent::URDU_TOKEN_RATIO
            }
        };

        if is_urdu {
            Language::Urdu
        } else {
            Language::English
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urdu_script_always_wins() {
        let detector = LanguageDetector::default();
        assert_eq!(detector.detect("قانون کیا ہے"), Language::Urdu);
        // Mixed script with English words still resolves to Urdu
        assert_eq!(detector.detect("what is قانون"), Language::Urdu);
    }

    #[test]
    fn test_roman_urdu_marker_words() {
        let detector = LanguageDetector::default();
        assert_eq!(detector.detect("Section 302 kya hai?"), Language::Urdu);
        assert_eq!(detector.detect("aap kaise madad kar sakte ho"), Language::Urdu);
    }

    #[test]
    fn test_english_without_markers() {
        let detector = LanguageDetector::default();
        assert_eq!(detector.detect("What is section 420?"), Language::English);
        assert_eq!(detector.detect("I need help with a contract"), Language::English);
    }

    #[test]
    fn test_marker_is_exact_token_not_substring() {
        let detector = LanguageDetector::default();
        // "main" inside "maintain" must not trigger
        assert_eq!(detector.detect("how to maintain records"), Language::English);
    }

    #[test]
    fn test_ratio_policy_needs_dominant_urdu() {
        let detector = LanguageDetector::new(DetectionPolicy::TokenRatio);
        // 1 marker of 7 tokens, below the threshold
        assert_eq!(
            detector.detect("salam everyone quick question about contract law"),
            Language::English
        );
        // 2 markers of 4 tokens
        assert_eq!(detector.detect("aap kaise help karenge"), Language::Urdu);
    }

    #[test]
    fn test_empty_query_defaults_english() {
        let detector = LanguageDetector::default();
        assert_eq!(detector.detect(""), Language::English);
        assert_eq!(detector.detect("   "), Language::English);
    }
}
