//! Lawyer directory
//!
//! Static city-keyed table of sample lawyer records with a keyword-
//! triggered search. Production deployments swap the table for a real
//! database; the lookup and formatting contract stays the same.

/// One directory entry
#[derive(Debug, Clone, Copy)]
pub struct Lawyer {
    pub name: &'static str,
    pub specialization: &'static str,
    pub experience: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub bar_council: &'static str,
    pub address: &'static str,
    pub rating: f32,
}

const LAWYER_KEYWORDS: &[&str] = &[
    "lawyer",
    "advocate",
    "attorney",
    "legal help",
    "legal representation",
    "wakeel",
    "qanooni madad",
    "lawyer chahiye",
    "advocate chahiye",
];

const SPECIALIZATIONS: &[&str] = &[
    "criminal",
    "civil",
    "family",
    "commercial",
    "corporate",
    "constitutional",
    "property",
];

const DIRECTORY: &[(&str, &[Lawyer])] = &[
    (
        "lahore",
        &[
            Lawyer {
                name: "Advocate Muhammad Ahmad Khan",
                specialization: "Criminal Law",
                experience: "15 years",
                email: "ahmad.khan@example.com",
                phone: "+92-42-1234567",
                bar_council: "Punjab Bar Council",
                address: "Mall Road, Lahore",
                rating: 4.5,
            },
            Lawyer {
                name: "Ms. Fatima Sheikh",
                specialization: "Family Law",
                experience: "12 years",
                email: "fatima.sheikh@example.com",
                phone: "+92-42-2345678",
                bar_council: "Punjab Bar Council",
                address: "Gulberg, Lahore",
                rating: 4.7,
            },
            Lawyer {
                name: "Advocate Ali Hassan",
                specialization: "Civil Law",
                experience: "18 years",
                email: "ali.hassan@example.com",
                phone: "+92-42-3456789",
                bar_council: "Punjab Bar Council",
                address: "Model Town, Lahore",
                rating: 4.6,
            },
            Lawyer {
                name: "Barrister Sarah Khan",
                specialization: "Corporate Law",
                experience: "10 years",
                email: "sarah.khan@example.com",
                phone: "+92-42-4567890",
                bar_council: "Punjab Bar Council",
                address: "DHA, Lahore",
                rating: 4.8,
            },
            Lawyer {
                name: "Advocate Usman Malik",
                specialization: "Constitutional Law",
                experience: "20 years",
                email: "usman.malik@example.com",
                phone: "+92-42-5678901",
                bar_council: "Punjab Bar Council",
                address: "Johar Town, Lahore",
                rating: 4.9,
            },
        ],
    ),
    (
        "karachi",
        &[
            Lawyer {
                name: "Advocate Imran Ahmed",
                specialization: "Criminal Law",
                experience: "16 years",
                email: "imran.ahmed@example.com",
                phone: "+92-21-1234567",
                bar_council: "Sindh Bar Council",
                address: "Clifton, Karachi",
                rating: 4.6,
            },
            Lawyer {
                name: "Ms. Aisha Siddiqui",
                specialization: "Family Law",
                experience: "14 years",
                email: "aisha.siddiqui@example.com",
                phone: "+92-21-2345678",
                bar_council: "Sindh Bar Council",
                address: "Defence, Karachi",
                rating: 4.5,
            },
            Lawyer {
                name: "Advocate Tariq Hussain",
                specialization: "Commercial Law",
                experience: "22 years",
                email: "tariq.hussain@example.com",
                phone: "+92-21-3456789",
                bar_council: "Sindh Bar Council",
                address: "I.I. Chundrigar Road, Karachi",
                rating: 4.8,
            },
            Lawyer {
                name: "Barrister Zara Ali",
                specialization: "Corporate Law",
                experience: "11 years",
                email: "zara.ali@example.com",
                phone: "+92-21-4567890",
                bar_council: "Sindh Bar Council",
                address: "Gulshan, Karachi",
                rating: 4.7,
            },
            Lawyer {
                name: "Advocate Bilal Shah",
                specialization: "Civil Law",
                experience: "19 years",
                email: "bilal.shah@example.com",
                phone: "+92-21-5678901",
                bar_council: "Sindh Bar Council",
                address: "Saddar, Karachi",
                rating: 4.4,
            },
        ],
    ),
    (
        "islamabad",
        &[
            Lawyer {
                name: "Advocate Kamran Malik",
                specialization: "Constitutional Law",
                experience: "25 years",
                email: "kamran.malik@example.com",
                phone: "+92-51-1234567",
                bar_council: "Islamabad Bar Council",
                address: "Blue Area, Islamabad",
                rating: 4.9,
            },
            Lawyer {
                name: "Ms. Hina Javed",
                specialization: "Criminal Law",
                experience: "13 years",
                email: "hina.javed@example.com",
                phone: "+92-51-2345678",
                bar_council: "Islamabad Bar Council",
                address: "F-8, Islamabad",
                rating: 4.6,
            },
            Lawyer {
                name: "Advocate Waqar Ahmad",
                specialization: "Corporate Law",
                experience: "17 years",
                email: "waqar.ahmad@example.com",
                phone: "+92-51-3456789",
                bar_council: "Islamabad Bar Council",
                address: "G-9, Islamabad",
                rating: 4.7,
            },
            Lawyer {
                name: "Barrister Ayesha Khan",
                specialization: "Family Law",
                experience: "12 years",
                email: "ayesha.khan@example.com",
                phone: "+92-51-4567890",
                bar_council: "Islamabad Bar Council",
                address: "F-10, Islamabad",
                rating: 4.8,
            },
            Lawyer {
                name: "Advocate Shahid Iqbal",
                specialization: "Civil Law",
                experience: "21 years",
                email: "shahid.iqbal@example.com",
                phone: "+92-51-5678901",
                bar_council: "Islamabad Bar Council",
                address: "G-11, Islamabad",
                rating: 4.5,
            },
        ],
    ),
    (
        "gujranwala",
        &[
            Lawyer {
                name: "Advocate Muhammad Akbar",
                specialization: "Criminal Law",
                experience: "14 years",
                email: "m.akbar@example.com",
                phone: "+92-55-1234567",
                bar_council: "Gujranwala Bar Association",
                address: "Civil Lines, Gujranwala",
                rating: 4.4,
            },
            Lawyer {
                name: "Ms. Nadia Butt",
                specialization: "Family Law",
                experience: "9 years",
                email: "nadia.butt@example.com",
                phone: "+92-55-2345678",
                bar_council: "Gujranwala Bar Association",
                address: "Model Town, Gujranwala",
                rating: 4.3,
            },
            Lawyer {
                name: "Advocate Rashid Ali",
                specialization: "Civil Law",
                experience: "16 years",
                email: "rashid.ali@example.com",
                phone: "+92-55-3456789",
                bar_council: "Gujranwala Bar Association",
                address: "Satellite Town, Gujranwala",
                rating: 4.5,
            },
            Lawyer {
                name: "Advocate Saba Malik",
                specialization: "Commercial Law",
                experience: "11 years",
                email: "saba.malik@example.com",
                phone: "+92-55-4567890",
                bar_council: "Gujranwala Bar Association",
                address: "Peoples Colony, Gujranwala",
                rating: 4.2,
            },
            Lawyer {
                name: "Advocate Zaheer Abbas",
                specialization: "Property Law",
                experience: "18 years",
                email: "zaheer.abbas@example.com",
                phone: "+92-55-5678901",
                bar_council: "Gujranwala Bar Association",
                address: "Rahwali, Gujranwala",
                rating: 4.6,
            },
        ],
    ),
    (
        "multan",
        &[
            Lawyer {
                name: "Advocate Hassan Raza",
                specialization: "Criminal Law",
                experience: "15 years",
                email: "hassan.raza@example.com",
                phone: "+92-61-1234567",
                bar_council: "Multan Bar Association",
                address: "Cantt, Multan",
                rating: 4.5,
            },
            Lawyer {
                name: "Ms. Farah Sheikh",
                specialization: "Family Law",
                experience: "10 years",
                email: "farah.sheikh@example.com",
                phone: "+92-61-2345678",
                bar_council: "Multan Bar Association",
                address: "Gulgasht Colony, Multan",
                rating: 4.4,
            },
            Lawyer {
                name: "Advocate Omar Farooq",
                specialization: "Civil Law",
                experience: "20 years",
                email: "omar.farooq@example.com",
                phone: "+92-61-3456789",
                bar_council: "Multan Bar Association",
                address: "New Multan, Multan",
                rating: 4.7,
            },
            Lawyer {
                name: "Barrister Amna Khan",
                specialization: "Corporate Law",
                experience: "8 years",
                email: "amna.khan@example.com",
                phone: "+92-61-4567890",
                bar_council: "Multan Bar Association",
                address: "Shah Rukn-e-Alam Colony, Multan",
                rating: 4.3,
            },
            Lawyer {
                name: "Advocate Junaid Ahmad",
                specialization: "Commercial Law",
                experience: "13 years",
                email: "junaid.ahmad@example.com",
                phone: "+92-61-5678901",
                bar_council: "Multan Bar Association",
                address: "Hussain Agahi, Multan",
                rating: 4.6,
            },
        ],
    ),
];

/// City-keyed lawyer lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct LawyerDirectory;

impl LawyerDirectory {
    pub fn new() -> Self {
        Self
    }

    /// Whether a query is asking for a lawyer at all
    pub fn is_lawyer_query(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();
        LAWYER_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword))
    }

    /// Lawyers in a city, optionally filtered by specialization,
    /// best-rated first
    pub fn lawyers_in_city(
        &self,
        city: &str,
        specialization: Option<&str>,
        limit: usize,
    ) -> Vec<Lawyer> {
        let city_lower = city.to_lowercase();
        let Some((_, lawyers)) = DIRECTORY.iter().find(|(name, _)| *name == city_lower) else {
            return Vec::new();
        };

        let mut matched: Vec<Lawyer> = lawyers
            .iter()
            .filter(|lawyer| match specialization {
                Some(spec) => lawyer
                    .specialization
                    .to_lowercase()
                    .contains(&spec.to_lowercase()),
                None => true,
            })
            .copied()
            .collect();
        matched.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        matched.truncate(limit);
        matched
    }

    pub fn supported_cities(&self) -> Vec<&'static str> {
        DIRECTORY.iter().map(|(city, _)| *city).collect()
    }

    /// Handle a lawyer-search query end to end
    ///
    /// Returns None when the query is not lawyer-related; the caller
    /// continues with the regular pipeline.
    pub fn search(&self, query: &str) -> Option<String> {
        if !self.is_lawyer_query(query) {
            return None;
        }

        let lowered = query.to_lowercase();
        let city = DIRECTORY
            .iter()
            .map(|(name, _)| *name)
            .find(|city| lowered.contains(city));
        let specialization = SPECIALIZATIONS
            .iter()
            .copied()
            .find(|spec| lowered.contains(spec));

        let Some(city) = city else {
            return Some(self.ask_for_city());
        };

        let lawyers = self.lawyers_in_city(city, specialization, 10);
        if lawyers.is_empty() {
            return Some(format!(
                "Sorry, I don't have lawyer information for {} city yet.",
                title_case(city)
            ));
        }

        Some(format_listing(&lawyers, &title_case(city), specialization))
    }

    fn ask_for_city(&self) -> String {
        let cities: Vec<String> = self
            .supported_cities()
            .into_iter()
            .map(title_case)
            .collect();
        format!(
            "Please specify which city you're looking for lawyers in. I have \
             lawyer information for: {}\n\nJust tell me your city and I'll find \
             qualified lawyers for you!",
            cities.join(", ")
        )
    }
}

fn format_listing(lawyers: &[Lawyer], city: &str, specialization: Option<&str>) -> String {
    let mut out = match specialization {
        Some(spec) => format!("**{} Lawyers in {}:**\n\n", title_case(spec), city),
        None => format!("**Qualified Lawyers in {}:**\n\n", city),
    };

    for (i, lawyer) in lawyers.iter().enumerate() {
        out.push_str(&format!(
            "**{n}. {name}**\n\
             **Specialization:** {spec}\n\
             **Experience:** {exp} | **Rating:** {rating}/5.0\n\
             **Email:** {email}\n\
             **Phone:** {phone}\n\
             **Bar Council:** {bar}\n\
             **Address:** {addr}\n\
             ---\n",
            n = i + 1,
            name = lawyer.name,
            spec = lawyer.specialization,
            exp = lawyer.experience,
            rating = lawyer.rating,
            email = lawyer.email,
            phone = lawyer.phone,
            bar = lawyer.bar_council,
            addr = lawyer.address,
        ));
    }

    out.push_str(
        "\n**Note:** These are qualified lawyers registered with their respective \
         Bar Councils. Please verify credentials and discuss fees before proceeding.",
    );
    out
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_lawyer_query_passes_through() {
        let directory = LawyerDirectory::new();
        assert!(directory.search("what is section 420").is_none());
    }

    #[test]
    fn test_city_listing_sorted_by_rating() {
        let directory = LawyerDirectory::new();
        let lawyers = directory.lawyers_in_city("lahore", None, 10);
        assert_eq!(lawyers.len(), 5);
        assert_eq!(lawyers[0].name, "Advocate Usman Malik");
        assert!(lawyers.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_specialization_filter() {
        let directory = LawyerDirectory::new();
        let criminal = directory.lawyers_in_city("karachi", Some("criminal"), 10);
        assert_eq!(criminal.len(), 1);
        assert_eq!(criminal[0].name, "Advocate Imran Ahmed");
    }

    #[test]
    fn test_search_extracts_city_and_specialization() {
        let directory = LawyerDirectory::new();
        let listing = directory
            .search("Find me a criminal lawyer in Karachi")
            .unwrap();
        assert!(listing.contains("Criminal Lawyers in Karachi"));
        assert!(listing.contains("Advocate Imran Ahmed"));
    }

    #[test]
    fn test_missing_city_asks_for_one() {
        let directory = LawyerDirectory::new();
        let reply = directory.search("I need legal help").unwrap();
        assert!(reply.contains("Please specify which city"));
        assert!(reply.contains("Lahore"));
        assert!(reply.contains("Multan"));
    }
}
