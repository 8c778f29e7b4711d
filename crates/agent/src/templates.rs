//! Fixed response templates
//!
//! Deterministic fallback text used when no completion service is
//! configured or a call to it fails. Criminal law gets a dedicated
//! English template; every other domain shares a generic one
//! parameterized by the domain name. Urdu uses a single generic
//! template. Retrieved context is deliberately not used here.

use adalat_core::{Domain, Language};

/// Analysis block in template mode
pub fn analysis(domain: Domain, language: Language) -> String {
    match language {
        Language::Urdu => format!(
            "**Qabil-e-Tatbeeq Qanoon aur Dafa'at:**\n\
             Aap ka sawal {domain} qanoon se mutalliq hai.\n\n\
             **Qanooni Matn:**\n\
             Mutalliqah qanooni dastavezat ki bunyad par.\n\n\
             **Mashwara:**\n\
             Mehrbani karke kisi Pakistani wakeel se raabta karen jo is \
             masle mein aap ki tafseel se madad kar sake.",
            domain = domain.tag()
        ),
        Language::English if domain == Domain::Criminal => "\
**Applicable Law & Section:**
Pakistan Penal Code 1860 - Various sections depending on the specific offense

**Key Legal Text:**
The Pakistan Penal Code defines various criminal offenses and their punishments.

**Punishment & Category:**
Varies based on specific section. Categories include:
- Bailable/Non-bailable
- Compoundable/Non-compoundable
- Cognizable/Non-cognizable

**Practical Implications:**
Criminal matters require immediate legal attention. Documentation and evidence \
preservation are crucial.

**Suggestions:**
1. Consult a criminal defense lawyer immediately
2. Do not make any statements without legal counsel
3. Preserve all evidence
4. Understand your rights under the law"
            .to_string(),
        Language::English => format!(
            "**Applicable Law & Section:**\n\
             Based on Pakistani {domain} law\n\n\
             **Key Legal Text:**\n\
             Please refer to the specific legal provisions retrieved from the documents.\n\n\
             **Practical Implications:**\n\
             This requires professional legal evaluation.\n\n\
             **Suggestions:**\n\
             Consult with a qualified Pakistani lawyer specializing in {domain} law \
             for specific guidance on your situation.",
            domain = domain.tag()
        ),
    }
}

/// Recommendations block in template mode
pub fn recommendations(domain: Domain, language: Language) -> String {
    match language {
        Language::Urdu => format!(
            "**Amal-qaabil Mashware:**\n\n\
             1. **Fauran:** Tamam zaruri kagzaat jama karen\n\
             2. **Wakeel:** Kisi qualified {domain} wakeel se raabta karen\n\
             3. **Rawaiye:** Qanooni rawaiye ka sahi tareeqe se itteba karen\n\
             4. **Ehtiyat:** Apne huqooq aur zimmedariyan samjhen",
            domain = domain.tag()
        ),
        Language::English => format!(
            "**Actionable Recommendations:**\n\n\
             1. **Immediate:** Gather all relevant documents and evidence\n\
             2. **Legal Counsel:** Consult with a qualified {domain} lawyer\n\
             3. **Procedures:** Follow proper legal procedures as per Pakistani law\n\
             4. **Precautions:** Understand your rights and obligations\n\
             5. **Documentation:** Keep detailed records of all interactions and documents",
            domain = domain.tag()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criminal_english_template_is_dedicated() {
        let text = analysis(Domain::Criminal, Language::English);
        assert!(text.contains("Pakistan Penal Code 1860"));
        assert!(text.contains("Bailable/Non-bailable"));
    }

    #[test]
    fn test_other_domains_share_generic_template() {
        let family = analysis(Domain::Family, Language::English);
        let civil = analysis(Domain::Civil, Language::English);
        assert!(family.contains("Pakistani family law"));
        assert!(civil.contains("Pakistani civil law"));
    }

    #[test]
    fn test_urdu_template_names_domain() {
        let text = analysis(Domain::Criminal, Language::Urdu);
        assert!(text.contains("criminal qanoon"));
        let recs = recommendations(Domain::Family, Language::Urdu);
        assert!(recs.contains("family wakeel"));
    }
}
