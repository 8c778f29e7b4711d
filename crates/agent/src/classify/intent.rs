//! Intent classification
//!
//! Separates casual conversation from substantive legal queries so the
//! pipeline can short-circuit without touching the index or the
//! completion service. A legal keyword always overrides a casual match:
//! "hi, what's the penalty for theft" is a legal query.

use adalat_config::constants::intent;
use adalat_core::Intent;

const CASUAL_ENGLISH: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "how are you",
    "whats up",
    "good morning",
    "good evening",
    "good afternoon",
    "thanks",
    "thank you",
    "bye",
    "goodbye",
    "who are you",
    "what is your name",
    "introduce yourself",
];

const CASUAL_URDU: &[&str] = &[
    "salam",
    "assalam",
    "kaise ho",
    "kya hal hai",
    "kaisa hai",
    "theek ho",
    "shukriya",
    "mehrbani",
    "allah hafiz",
    "khuda hafiz",
    "tum kaun ho",
    "aap ka naam kya hai",
];

const LEGAL_KEYWORDS: &[&str] = &[
    "law", "section", "act", "code", "penal", "court", "judge", "case", "lawyer", "attorney",
    "legal", "rights", "punishment", "crime", "qanoon", "dafa", "kanoon", "adalat", "wakeel",
    "saza", "jurm",
];

/// Classifies a query as casual chat or a legal query
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, query: &str) -> Intent {
        let lowered = query.to_lowercase();

        let is_casual = CASUAL_ENGLISH
            .iter()
            .chain(CASUAL_URDU)
            .any(|pattern| lowered.contains(pattern));
        let has_legal_keyword = LEGAL_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword));
        let token_count = query.split_whitespace().count();

        if is_casual && !has_legal_keyword && token_count < intent::CASUAL_MAX_TOKENS {
            Intent::CasualChat
        } else {
            Intent::LegalQuery
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings_are_casual() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("Hi, how are you?"), Intent::CasualChat);
        assert_eq!(classifier.classify("Salam, kaise ho?"), Intent::CasualChat);
        assert_eq!(classifier.classify("thank you so much"), Intent::CasualChat);
    }

    #[test]
    fn test_legal_keyword_overrides_casual() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("hi, what's the punishment for theft"),
            Intent::LegalQuery
        );
        assert_eq!(classifier.classify("salam, dafa 302 kya hai"), Intent::LegalQuery);
    }

    #[test]
    fn test_long_queries_are_never_casual() {
        let classifier = IntentClassifier::new();
        let long = "hi there my friend I was wondering if you could possibly \
                    help me understand something quite complicated today please";
        assert_eq!(classifier.classify(long), Intent::LegalQuery);
    }

    #[test]
    fn test_plain_questions_default_to_legal() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("my neighbor built a wall on my land"),
            Intent::LegalQuery
        );
    }
}
