//! Academic domain inference from title + subject.
//!
//! Each domain owns a small keyword vocabulary. The classifier counts how
//! many of a domain's keywords occur in the combined lower-cased text and
//! picks the domain with the strictly highest count, scanning domains in
//! declaration order — so the earliest domain wins ties. Matching is
//! substring containment, not word-boundary: "war" also hits inside
//! "warm". That looseness is part of the observed behavior and is kept.

use serde::{Deserialize, Serialize};

/// Academic subject category used to select a description template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AcademicDomain {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    ComputerScience,
    Engineering,
    Literature,
    History,
    Philosophy,
    Psychology,
    Sociology,
    Economics,
    Linguistics,
    Art,
    Music,
    Business,
    Education,
    Medicine,
    Law,
    /// Fallback when no vocabulary matches
    #[default]
    General,
}

impl AcademicDomain {
    pub fn as_str(&self) -> &str {
        match self {
            AcademicDomain::Mathematics => "mathematics",
            AcademicDomain::Physics => "physics",
            AcademicDomain::Chemistry => "chemistry",
            AcademicDomain::Biology => "biology",
            AcademicDomain::ComputerScience => "computer-science",
            AcademicDomain::Engineering => "engineering",
            AcademicDomain::Literature => "literature",
            AcademicDomain::History => "history",
            AcademicDomain::Philosophy => "philosophy",
            AcademicDomain::Psychology => "psychology",
            AcademicDomain::Sociology => "sociology",
            AcademicDomain::Economics => "economics",
            AcademicDomain::Linguistics => "linguistics",
            AcademicDomain::Art => "art",
            AcademicDomain::Music => "music",
            AcademicDomain::Business => "business",
            AcademicDomain::Education => "education",
            AcademicDomain::Medicine => "medicine",
            AcademicDomain::Law => "law",
            AcademicDomain::General => "general",
        }
    }
}

impl std::fmt::Display for AcademicDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain vocabularies in declaration order. The order is load-bearing:
/// ties on keyword count resolve to the earliest entry.
const DOMAIN_VOCABULARIES: &[(AcademicDomain, &[&str])] = &[
    // STEM fields
    (
        AcademicDomain::Mathematics,
        &[
            "calculus",
            "algebra",
            "geometry",
            "statistics",
            "probability",
            "theorem",
            "proof",
            "equation",
            "function",
            "derivative",
            "integral",
            "matrix",
        ],
    ),
    (
        AcademicDomain::Physics,
        &[
            "mechanics",
            "thermodynamics",
            "quantum",
            "relativity",
            "electromagnetic",
            "optics",
            "wave",
            "particle",
            "energy",
            "force",
            "motion",
        ],
    ),
    (
        AcademicDomain::Chemistry,
        &[
            "organic",
            "inorganic",
            "biochemistry",
            "molecular",
            "reaction",
            "synthesis",
            "titration",
            "spectroscopy",
            "catalyst",
            "compound",
        ],
    ),
    (
        AcademicDomain::Biology,
        &[
            "genetics",
            "evolution",
            "ecology",
            "anatomy",
            "physiology",
            "microbiology",
            "cell",
            "organism",
            "species",
            "dna",
            "protein",
        ],
    ),
    (
        AcademicDomain::ComputerScience,
        &[
            "algorithm",
            "programming",
            "software",
            "database",
            "network",
            "security",
            "ai",
            "machine learning",
            "web",
            "app",
            "code",
        ],
    ),
    (
        AcademicDomain::Engineering,
        &[
            "design",
            "circuit",
            "mechanical",
            "electrical",
            "civil",
            "system",
            "optimization",
            "simulation",
            "prototype",
        ],
    ),
    // Humanities & social sciences
    (
        AcademicDomain::Literature,
        &[
            "shakespeare",
            "poetry",
            "novel",
            "narrative",
            "literary",
            "author",
            "character",
            "theme",
            "symbolism",
            "rhetoric",
        ],
    ),
    (
        AcademicDomain::History,
        &[
            "war",
            "revolution",
            "empire",
            "civilization",
            "ancient",
            "medieval",
            "renaissance",
            "colonial",
            "historical",
            "timeline",
        ],
    ),
    (
        AcademicDomain::Philosophy,
        &[
            "ethics",
            "logic",
            "metaphysics",
            "epistemology",
            "moral",
            "argument",
            "theory",
            "philosophical",
            "reasoning",
        ],
    ),
    (
        AcademicDomain::Psychology,
        &[
            "behavior",
            "cognitive",
            "social",
            "developmental",
            "personality",
            "therapy",
            "mental",
            "psychological",
        ],
    ),
    (
        AcademicDomain::Sociology,
        &[
            "society",
            "culture",
            "social",
            "community",
            "inequality",
            "demographic",
            "sociological",
        ],
    ),
    (
        AcademicDomain::Economics,
        &[
            "market", "economy", "trade", "finance", "economic", "supply", "demand", "inflation",
            "gdp",
        ],
    ),
    // Languages
    (
        AcademicDomain::Linguistics,
        &[
            "language",
            "grammar",
            "syntax",
            "phonetics",
            "morphology",
            "semantic",
            "linguistic",
        ],
    ),
    // Arts & creative
    (
        AcademicDomain::Art,
        &[
            "painting",
            "sculpture",
            "visual",
            "artistic",
            "aesthetic",
            "gallery",
            "museum",
            "creative",
        ],
    ),
    (
        AcademicDomain::Music,
        &[
            "composition",
            "harmony",
            "melody",
            "rhythm",
            "musical",
            "instrument",
            "performance",
        ],
    ),
    // Applied fields
    (
        AcademicDomain::Business,
        &[
            "marketing",
            "management",
            "strategy",
            "entrepreneurship",
            "business",
            "corporate",
            "finance",
        ],
    ),
    (
        AcademicDomain::Education,
        &[
            "teaching",
            "learning",
            "curriculum",
            "pedagogy",
            "educational",
            "classroom",
        ],
    ),
    (
        AcademicDomain::Medicine,
        &[
            "medical",
            "clinical",
            "patient",
            "diagnosis",
            "treatment",
            "health",
            "disease",
        ],
    ),
    (
        AcademicDomain::Law,
        &[
            "legal",
            "court",
            "justice",
            "constitutional",
            "criminal",
            "civil",
            "law",
        ],
    ),
];

/// Infer the most likely academic domain from title and subject.
///
/// Returns [`AcademicDomain::General`] when no keyword matches at all.
pub fn infer_domain(title: &str, subject: &str) -> AcademicDomain {
    let combined = format!("{} {}", title.to_lowercase(), subject.to_lowercase());

    let mut best_match = AcademicDomain::General;
    let mut max_matches = 0;

    for (domain, keywords) in DOMAIN_VOCABULARIES {
        let matches = keywords.iter().filter(|kw| combined.contains(**kw)).count();
        if matches > max_matches {
            max_matches = matches;
            best_match = *domain;
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_alone_can_classify() {
        assert_eq!(
            infer_domain("Final Project", "quantum mechanics"),
            AcademicDomain::Physics
        );
    }

    #[test]
    fn test_no_matches_falls_back_to_general() {
        assert_eq!(infer_domain("Xyzzy Quux", ""), AcademicDomain::General);
        assert_eq!(infer_domain("", ""), AcademicDomain::General);
    }

    #[test]
    fn test_tie_resolves_to_earliest_domain() {
        // "equation" (mathematics) and "war" (history): one keyword each,
        // mathematics is declared first
        assert_eq!(
            infer_domain("Equation of War", ""),
            AcademicDomain::Mathematics
        );
    }

    #[test]
    fn test_higher_count_beats_earlier_declaration() {
        // One mathematics keyword vs two history keywords
        assert_eq!(
            infer_domain("Proof of Ancient War Tactics", ""),
            AcademicDomain::History
        );
    }

    #[test]
    fn test_substring_containment_quirk() {
        // "war" matches inside "warmth" — kept from the observed behavior
        assert_eq!(infer_domain("Warmth Retention", ""), AcademicDomain::History);
    }

    #[test]
    fn test_multiword_keyword_matches() {
        assert_eq!(
            infer_domain("Intro to Machine Learning", ""),
            AcademicDomain::ComputerScience
        );
    }

    #[test]
    fn test_physics_example() {
        assert_eq!(
            infer_domain("Quantum Tunneling Effects in Semiconductor Devices", "Physics"),
            AcademicDomain::Physics
        );
    }
}
