//! Per-domain description templates.
//!
//! Each template composes three parts: an opening sentence built from the
//! analyzed project type and extracted concepts, a methodology sentence
//! picked by branching on the analysis tags, and a fixed closing sentence.
//! Dispatch over [`AcademicDomain`] is total — domains without a dedicated
//! template fall back to [`GeneralTemplate`].

use super::analysis::{Methodology, Scope, TitleAnalysis};
use super::classifier::AcademicDomain;

/// A description template for one academic domain.
///
/// `generate` is pure: same analysis, title and subject always produce the
/// same text.
pub trait DomainTemplate: Send + Sync {
    fn generate(&self, analysis: &TitleAnalysis, title: &str, subject: &str) -> String;
}

/// Select the template for a domain.
///
/// The `_` arm keeps the mapping total: any domain without a dedicated
/// template (engineering, philosophy, sociology, linguistics, music,
/// business, education, medicine, law) renders through the general one.
pub fn template_for(domain: AcademicDomain) -> &'static dyn DomainTemplate {
    match domain {
        AcademicDomain::Mathematics => &MathematicsTemplate,
        AcademicDomain::Physics => &PhysicsTemplate,
        AcademicDomain::Chemistry => &ChemistryTemplate,
        AcademicDomain::Biology => &BiologyTemplate,
        AcademicDomain::ComputerScience => &ComputerScienceTemplate,
        AcademicDomain::Literature => &LiteratureTemplate,
        AcademicDomain::History => &HistoryTemplate,
        AcademicDomain::Psychology => &PsychologyTemplate,
        AcademicDomain::Economics => &EconomicsTemplate,
        AcademicDomain::Art => &ArtTemplate,
        _ => &GeneralTemplate,
    }
}

/// First concept, or the domain's fallback noun phrase.
fn main_topic<'a>(analysis: &'a TitleAnalysis, fallback: &'a str) -> &'a str {
    analysis
        .main_concepts
        .first()
        .map(String::as_str)
        .unwrap_or(fallback)
}

/// Remaining concepts joined for the connector clause.
fn remaining_concepts(analysis: &TitleAnalysis) -> String {
    analysis.main_concepts[1..].join(" and ")
}

pub struct MathematicsTemplate;

impl DomainTemplate for MathematicsTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This {} focuses on {}",
            analysis.project_type,
            main_topic(analysis, "mathematical concepts")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(
                " and explores the relationships between {}",
                remaining_concepts(analysis)
            ));
        }
        description.push('.');

        match analysis.methodology {
            Methodology::Analytical => description.push_str(
                " The work employs rigorous mathematical analysis and proof techniques to establish theoretical foundations and derive key results.",
            ),
            Methodology::Computational => description.push_str(
                " Mathematical modeling and computational methods are used to solve complex problems and validate theoretical predictions.",
            ),
            _ => description.push_str(
                " The investigation applies mathematical reasoning and problem-solving strategies to develop comprehensive understanding.",
            ),
        }

        description.push_str(
            " The findings contribute to mathematical knowledge and demonstrate proficiency in advanced mathematical concepts.",
        );

        description
    }
}

pub struct PhysicsTemplate;

impl DomainTemplate for PhysicsTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This physics {} investigates {}",
            analysis.project_type,
            main_topic(analysis, "physical phenomena")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(
                " with particular attention to {}",
                remaining_concepts(analysis)
            ));
        }
        description.push('.');

        match analysis.methodology {
            Methodology::Experimental => description.push_str(
                " Experimental procedures involve precise measurements, data collection, and statistical analysis to test theoretical predictions.",
            ),
            Methodology::Computational => description.push_str(
                " Theoretical modeling and computational simulations are employed to understand underlying physical mechanisms.",
            ),
            _ => description.push_str(
                " The study applies fundamental physical principles and mathematical frameworks to analyze complex systems.",
            ),
        }

        description.push_str(
            " Results provide insights into the nature of physical processes and validate established scientific theories.",
        );

        description
    }
}

pub struct ChemistryTemplate;

impl DomainTemplate for ChemistryTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This chemical {} examines {}",
            analysis.project_type,
            main_topic(analysis, "chemical systems")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(" focusing on {}", remaining_concepts(analysis)));
        }
        description.push('.');

        match analysis.methodology {
            Methodology::Experimental => description.push_str(
                " Laboratory techniques include synthesis, purification, and characterization using modern analytical instruments.",
            ),
            Methodology::Analytical => description.push_str(
                " Spectroscopic methods and analytical techniques are employed to determine molecular structure and reaction mechanisms.",
            ),
            _ => description.push_str(
                " The investigation utilizes chemical principles to understand molecular behavior and reaction pathways.",
            ),
        }

        description.push_str(
            " The work advances understanding of chemical processes and demonstrates practical applications in the field.",
        );

        description
    }
}

pub struct BiologyTemplate;

impl DomainTemplate for BiologyTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This biological {} explores {}",
            analysis.project_type,
            main_topic(analysis, "biological systems")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(
                " and examines the interactions between {}",
                remaining_concepts(analysis)
            ));
        }
        description.push('.');

        match analysis.methodology {
            Methodology::Experimental => description.push_str(
                " Controlled experiments and biological assays are conducted to test hypotheses and measure biological responses.",
            ),
            Methodology::Analytical => description.push_str(
                " Data analysis and statistical methods are applied to identify patterns and draw meaningful conclusions from biological data.",
            ),
            _ => description.push_str(
                " The research employs scientific methodology to investigate life processes and ecological relationships.",
            ),
        }

        description.push_str(
            " Findings contribute to our understanding of living organisms and their complex biological functions.",
        );

        description
    }
}

pub struct ComputerScienceTemplate;

impl DomainTemplate for ComputerScienceTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This computer science {} develops {}",
            analysis.project_type,
            main_topic(analysis, "computational systems")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(" incorporating {}", remaining_concepts(analysis)));
        }
        description.push('.');

        match analysis.methodology {
            Methodology::Constructive => description.push_str(
                " Software engineering principles guide the design, implementation, and testing phases of development.",
            ),
            Methodology::Analytical => description.push_str(
                " Algorithm analysis and performance evaluation techniques are used to optimize computational efficiency.",
            ),
            _ => description.push_str(
                " The project applies computational thinking and programming methodologies to solve complex technical challenges.",
            ),
        }

        description.push_str(
            " The resulting system demonstrates practical applications and advances in computer science technology.",
        );

        description
    }
}

pub struct LiteratureTemplate;

impl DomainTemplate for LiteratureTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This literary {} examines {}",
            analysis.project_type,
            main_topic(analysis, "literary works")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(" with focus on {}", remaining_concepts(analysis)));
        }
        description.push('.');

        if analysis.methodology == Methodology::Analytical {
            description.push_str(
                " Close reading techniques and textual analysis reveal deeper meanings, themes, and literary devices employed by the author.",
            );
        } else if analysis.scope == Scope::Comparative {
            description.push_str(
                " Comparative analysis explores similarities and differences across multiple texts within their historical and cultural contexts.",
            );
        } else {
            description.push_str(
                " The study employs critical literary theory to interpret narrative structure, character development, and thematic elements.",
            );
        }

        description.push_str(
            " The analysis contributes to scholarly understanding of literature and demonstrates advanced interpretive skills.",
        );

        description
    }
}

pub struct HistoryTemplate;

impl DomainTemplate for HistoryTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This historical {} investigates {}",
            analysis.project_type,
            main_topic(analysis, "historical events")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(
                " and analyzes the significance of {}",
                remaining_concepts(analysis)
            ));
        }
        description.push('.');

        if analysis.methodology == Methodology::Analytical {
            description.push_str(
                " Primary source documents and historical evidence are critically examined to understand causation and historical context.",
            );
        } else if analysis.scope == Scope::Comparative {
            description.push_str(
                " Comparative historical analysis reveals patterns and connections across different time periods and geographical regions.",
            );
        } else {
            description.push_str(
                " The research employs historical methodology to interpret past events and their lasting impact on society.",
            );
        }

        description.push_str(
            " The work provides valuable insights into historical processes and enhances understanding of the past.",
        );

        description
    }
}

pub struct PsychologyTemplate;

impl DomainTemplate for PsychologyTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This psychological {} investigates {}",
            analysis.project_type,
            main_topic(analysis, "psychological phenomena")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(
                " and explores relationships with {}",
                remaining_concepts(analysis)
            ));
        }
        description.push('.');

        match analysis.methodology {
            Methodology::Experimental => description.push_str(
                " Controlled psychological experiments are designed to test hypotheses about human behavior and cognitive processes.",
            ),
            Methodology::Analytical => description.push_str(
                " Statistical analysis of behavioral data reveals patterns and correlations in psychological responses.",
            ),
            _ => description.push_str(
                " The study applies psychological theory and research methods to understand mental processes and behavior.",
            ),
        }

        description.push_str(
            " Results contribute to psychological knowledge and inform evidence-based practices in the field.",
        );

        description
    }
}

pub struct EconomicsTemplate;

impl DomainTemplate for EconomicsTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This economic {} analyzes {}",
            analysis.project_type,
            main_topic(analysis, "economic factors")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(
                " and examines the impact of {}",
                remaining_concepts(analysis)
            ));
        }
        description.push('.');

        if analysis.methodology == Methodology::Analytical {
            description.push_str(
                " Economic modeling and statistical analysis are employed to understand market dynamics and economic relationships.",
            );
        } else {
            description.push_str(
                " The research applies economic theory and quantitative methods to analyze complex economic phenomena.",
            );
        }

        description.push_str(
            " Findings provide insights into economic behavior and inform policy recommendations for real-world applications.",
        );

        description
    }
}

pub struct ArtTemplate;

impl DomainTemplate for ArtTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This artistic {} explores {}",
            analysis.project_type,
            main_topic(analysis, "artistic elements")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(
                " through examination of {}",
                remaining_concepts(analysis)
            ));
        }
        description.push('.');

        match analysis.methodology {
            Methodology::Analytical => description.push_str(
                " Visual analysis and art historical methods are applied to understand aesthetic principles and cultural significance.",
            ),
            Methodology::Constructive => description.push_str(
                " Creative practice and artistic techniques are employed to develop original works and explore artistic expression.",
            ),
            _ => description.push_str(
                " The work investigates artistic concepts through both theoretical study and practical application.",
            ),
        }

        description.push_str(
            " The project demonstrates understanding of artistic traditions and contributes to contemporary artistic discourse.",
        );

        description
    }
}

pub struct GeneralTemplate;

impl DomainTemplate for GeneralTemplate {
    fn generate(&self, analysis: &TitleAnalysis, _title: &str, _subject: &str) -> String {
        let mut description = format!(
            "This academic {} examines {}",
            analysis.project_type,
            main_topic(analysis, "key concepts")
        );
        if analysis.main_concepts.len() > 1 {
            description.push_str(&format!(
                " and investigates connections with {}",
                remaining_concepts(analysis)
            ));
        }
        description.push('.');

        match analysis.methodology {
            Methodology::Analytical => description.push_str(
                " Systematic analysis and critical evaluation are employed to develop comprehensive understanding of the subject matter.",
            ),
            Methodology::Experimental => description.push_str(
                " Empirical investigation and data collection provide evidence-based insights into the research questions.",
            ),
            Methodology::Constructive => description.push_str(
                " Practical development and implementation demonstrate application of theoretical knowledge to real-world challenges.",
            ),
            _ => description.push_str(
                " The study applies appropriate research methods to investigate important questions within the discipline.",
            ),
        }

        description.push_str(
            " The work demonstrates mastery of academic skills and contributes meaningful insights to the field of study.",
        );

        description
    }
}
