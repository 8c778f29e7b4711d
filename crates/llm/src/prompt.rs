//! Bilingual prompt construction
//!
//! Builds the structured prompts for the two generation passes: the
//! legal analysis (five fixed subsections) and the actionable
//! recommendations. Prompts are written in the query's detected language
//! and instruct the model to answer in it.

use adalat_core::{Domain, Language};

/// Builds analysis and recommendation prompts
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Prompt for the legal-analysis block
    ///
    /// Requests the five fixed subsections (applicable law & section,
    /// key legal text, punishment & category, practical implications,
    /// suggestions). Prior conversation turns, when present, are
    /// embedded so follow-up questions resolve correctly.
    pub fn analysis_prompt(
        &self,
        query: &str,
        domain: Domain,
        context: &str,
        language: Language,
        history: Option<&str>,
    ) -> String {
        let history_block = match history {
            Some(h) if !h.is_empty() => match language {
                Language::Urdu => format!("\nPichli Guftagu:\n{}\n", h),
                Language::English => format!("\nConversation so far:\n{}\n", h),
            },
            _ => String::new(),
        };

        match language {
            Language::Urdu => format!(
                "Aap ek Pakistani qanoon ke mahir hain. Is legal sawal ka jawab \
                 Pakistani qanoon ke mutabiq dein.\n\
                 {history_block}\n\
                 Sawal: {query}\n\
                 Legal Domain: {domain}\n\n\
                 Mutalliqah Qanooni Maloomat:\n{context}\n\n\
                 Tafseel se jawab dein jismein shamil hon:\n\
                 1. **Qabil-e-Tatbeeq Qanoon aur Dafa'at (Applicable Law & Sections)**\n\
                 2. **Qanooni Matn (Legal Text - mukhtasar)**\n\
                 3. **Saza aur Category (Punishment & Category)**\n\
                 4. **Amali Nuktay (Practical Implications)**\n\
                 5. **Mashware (Suggestions)**\n\n\
                 Apna jawab factual aur Pakistani qanoon par mabni rakhein. \
                 Urdu mein jawab dein.",
                history_block = history_block,
                query = query,
                domain = domain.tag(),
                context = context,
            ),
            Language::English => format!(
                "You are a professional, intelligent Pakistani legal expert. \
                 Analyze this legal query based on Pakistani law.\n\
                 {history_block}\n\
                 Query: {query}\n\
                 Legal Domain: {domain}\n\n\
                 Relevant Legal Context:\n{context}\n\n\
                 Provide a structured, clear analysis including:\n\n\
                 **Applicable Law & Section:**\n\
                 [Specify the exact law and section number]\n\n\
                 **Key Legal Text (simplified):**\n\
                 [Brief explanation of what the law says]\n\n\
                 **Punishment & Category:**\n\
                 [Punishment details, whether bailable/non-bailable, \
                 compoundable/non-compoundable, which court]\n\n\
                 **Practical Implications:**\n\
                 [What this means in practice for the user]\n\n\
                 **Suggestions:**\n\
                 [Next steps, whether to consult lawyer, file FIR, etc.]\n\n\
                 Keep your response professional, empathetic, and factual \
                 based on Pakistani law.",
                history_block = history_block,
                query = query,
                domain = domain.tag(),
                context = context,
            ),
        }
    }

    /// Prompt for the recommendations block
    ///
    /// Requests immediate actions, required documentation, procedural
    /// steps, precautions and timeline considerations, grounded in the
    /// already-produced analysis.
    pub fn recommendations_prompt(
        &self,
        query: &str,
        domain: Domain,
        analysis: &str,
        language: Language,
    ) -> String {
        match language {
            Language::Urdu => format!(
                "Is qanooni tajziye ke mutabiq, wazeh aur amal-qaabil mashware dein:\n\n\
                 Sawal: {query}\n\
                 Domain: {domain}\n\
                 Tajziya: {analysis}\n\n\
                 Mashware dein:\n\
                 1. Fauran kya karna chahiye\n\
                 2. Kaunse kagzaat chahiye\n\
                 3. Qanooni rawaiye\n\
                 4. Ehtiyati tadabeer\n\
                 5. Waqt ka khayal\n\n\
                 Mashware practical aur Pakistani qanooni nizam ke mutabiq hon. \
                 Urdu mein jawab dein.",
                query = query,
                domain = domain.tag(),
                analysis = analysis,
            ),
            Language::English => format!(
                "Based on this legal analysis, provide clear, actionable recommendations:\n\n\
                 Query: {query}\n\
                 Domain: {domain}\n\
                 Analysis: {analysis}\n\n\
                 Provide step-by-step recommendations:\n\
                 1. Immediate actions to take\n\
                 2. Documentation needed\n\
                 3. Legal procedures to follow\n\
                 4. Precautions and warnings\n\
                 5. Timeline considerations\n\n\
                 Make recommendations practical, empathetic, and specific to \
                 the Pakistani legal system.",
                query = query,
                domain = domain.tag(),
                analysis = analysis,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_query_and_context() {
        let builder = PromptBuilder::new();
        let prompt = builder.analysis_prompt(
            "What is section 420?",
            Domain::Criminal,
            "PPC 420: cheating and dishonestly inducing delivery of property",
            Language::English,
            None,
        );
        assert!(prompt.contains("What is section 420?"));
        assert!(prompt.contains("Legal Domain: criminal"));
        assert!(prompt.contains("cheating and dishonestly"));
        assert!(prompt.contains("**Applicable Law & Section:**"));
        assert!(!prompt.contains("Conversation so far"));
    }

    #[test]
    fn test_analysis_prompt_urdu_sections() {
        let builder = PromptBuilder::new();
        let prompt = builder.analysis_prompt(
            "Dafa 302 kya hai?",
            Domain::Criminal,
            "context",
            Language::Urdu,
            None,
        );
        assert!(prompt.contains("Qabil-e-Tatbeeq Qanoon"));
        assert!(prompt.contains("Urdu mein jawab dein"));
    }

    #[test]
    fn test_history_block_included_when_present() {
        let builder = PromptBuilder::new();
        let prompt = builder.analysis_prompt(
            "and what about bail?",
            Domain::Criminal,
            "context",
            Language::English,
            Some("User: What is section 302?\nAssistant: Section 302 covers murder."),
        );
        assert!(prompt.contains("Conversation so far:"));
        assert!(prompt.contains("What is section 302?"));
    }

    #[test]
    fn test_recommendations_prompt_embeds_analysis() {
        let builder = PromptBuilder::new();
        let prompt = builder.recommendations_prompt(
            "How to file for divorce?",
            Domain::Family,
            "Family law analysis here",
            Language::English,
        );
        assert!(prompt.contains("Family law analysis here"));
        assert!(prompt.contains("Immediate actions to take"));
    }
}
