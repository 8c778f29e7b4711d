//! Lawyer specialization guidance
//!
//! Pure mapping from legal domain to a bilingual specialization label
//! plus generic verification advice. Unrecognized domains fall back to
//! general practice.

use adalat_core::{Domain, Language};

/// English and Urdu specialization labels for a domain
pub fn specialization(domain: Domain) -> (&'static str, &'static str) {
    match domain {
        Domain::Criminal => ("Criminal Defense Lawyer", "Criminal Defense Wakeel"),
        Domain::PoliceMisconduct => ("Criminal Defense Lawyer", "Criminal Defense Wakeel"),
        Domain::Civil => ("Civil Litigation Lawyer", "Civil Wakeel"),
        Domain::Family => ("Family Law Lawyer", "Family Law Wakeel"),
        Domain::Commercial => ("Corporate/Commercial Lawyer", "Corporate/Commercial Wakeel"),
        Domain::Constitutional => ("Constitutional Lawyer", "Constitutional Wakeel"),
        Domain::General => ("General Practice Lawyer", "General Practice Wakeel"),
    }
}

/// Guidance block naming the specialization and what to verify
pub fn guidance(domain: Domain, language: Language) -> String {
    let (label_en, label_ur) = specialization(domain);
    match language {
        Language::Urdu => format!(
            "**Tavsiya Shuda Qanooni Numayandagi:** {label}\n\n\
             **Is Maharat ki Wajah:**\n\
             - {domain} qanoon mein maharat\n\
             - Isi tarah ke cases mein tajruba\n\
             - Mutalliqah rawaiye ka ilm\n\n\
             **Kya Dhundna Chahiye:**\n\
             - Bar Council ki registration\n\
             - {domain} cases mein tajruba\n\
             - Acha track record\n\
             - Wazeh fee structure",
            label = label_ur,
            domain = domain.tag()
        ),
        Language::English => format!(
            "**Recommended Legal Representation:** {label}\n\n\
             **Why this specialization:**\n\
             - Specialized knowledge in {domain} law\n\
             - Experience with similar cases\n\
             - Understanding of relevant procedures\n\n\
             **What to look for:**\n\
             - Bar Council registration\n\
             - Experience in {domain} cases\n\
             - Good track record\n\
             - Clear fee structure",
            label = label_en,
            domain = domain.tag()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialization_labels() {
        assert_eq!(specialization(Domain::Criminal).0, "Criminal Defense Lawyer");
        assert_eq!(specialization(Domain::Family).1, "Family Law Wakeel");
        assert_eq!(specialization(Domain::General).0, "General Practice Lawyer");
    }

    #[test]
    fn test_guidance_in_both_languages() {
        let english = guidance(Domain::Commercial, Language::English);
        assert!(english.contains("Corporate/Commercial Lawyer"));
        assert!(english.contains("Bar Council registration"));

        let urdu = guidance(Domain::Commercial, Language::Urdu);
        assert!(urdu.contains("Corporate/Commercial Wakeel"));
        assert!(urdu.contains("Bar Council ki registration"));
    }
}
