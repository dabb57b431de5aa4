//! Title analysis: classify a raw project title into coarse tags.
//!
//! Every detector scans the lower-cased title for substrings in a fixed
//! priority order; the first hit wins and a documented default applies when
//! nothing matches. The scans are substring checks, not word-boundary
//! matches, so e.g. "lab" also hits inside "collaboration".

use super::concepts::extract_main_concepts;
use serde::{Deserialize, Serialize};

/// Kind of deliverable the title describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Research,
    Analysis,
    Paper,
    Presentation,
    Experiment,
    #[default]
    Project,
    Review,
    Study,
    Report,
}

impl ProjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::Research => "research",
            ProjectType::Analysis => "analysis",
            ProjectType::Paper => "paper",
            ProjectType::Presentation => "presentation",
            ProjectType::Experiment => "experiment",
            ProjectType::Project => "project",
            ProjectType::Review => "review",
            ProjectType::Study => "study",
            ProjectType::Report => "report",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse research approach inferred from the title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Methodology {
    Experimental,
    Analytical,
    Constructive,
    Review,
    Computational,
    #[default]
    Investigative,
}

/// Breadth of the work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Comprehensive,
    Comparative,
    Focused,
    Broad,
    #[default]
    Standard,
}

/// What the work is driving at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Impact,
    Optimization,
    Comparison,
    Development,
    #[default]
    Exploration,
}

/// Everything the generator needs to know about a title.
///
/// Created fresh per generation call; every tag field is always assigned
/// (defaults apply when no keyword matches).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAnalysis {
    pub original_title: String,
    pub project_type: ProjectType,
    /// Up to 3 salient phrases, in title order
    pub main_concepts: Vec<String>,
    pub methodology: Methodology,
    pub scope: Scope,
    pub focus: Focus,
}

impl TitleAnalysis {
    /// Analyze a title. Never fails; an empty title yields all defaults and
    /// no concepts.
    pub fn from_title(title: &str) -> Self {
        let lower = title.to_lowercase();

        Self {
            original_title: title.to_string(),
            project_type: detect_project_type(&lower),
            main_concepts: extract_main_concepts(title),
            methodology: detect_methodology(&lower),
            scope: detect_scope(&lower),
            focus: detect_focus(&lower),
        }
    }
}

fn detect_project_type(lower: &str) -> ProjectType {
    if lower.contains("research") || lower.contains("investigation") {
        return ProjectType::Research;
    }
    if lower.contains("analysis") || lower.contains("analyze") {
        return ProjectType::Analysis;
    }
    if lower.contains("essay") || lower.contains("paper") {
        return ProjectType::Paper;
    }
    if lower.contains("presentation") || lower.contains("speech") {
        return ProjectType::Presentation;
    }
    if lower.contains("lab") || lower.contains("experiment") {
        return ProjectType::Experiment;
    }
    if lower.contains("design")
        || lower.contains("build")
        || lower.contains("create")
        || lower.contains("develop")
    {
        return ProjectType::Project;
    }
    if lower.contains("review") || lower.contains("survey") {
        return ProjectType::Review;
    }
    if lower.contains("study") || lower.contains("examination") {
        return ProjectType::Study;
    }
    if lower.contains("report") {
        return ProjectType::Report;
    }
    ProjectType::Project
}

fn detect_methodology(lower: &str) -> Methodology {
    if lower.contains("experiment") || lower.contains("lab") {
        return Methodology::Experimental;
    }
    if lower.contains("analysis") || lower.contains("analyze") {
        return Methodology::Analytical;
    }
    if lower.contains("design") || lower.contains("build") || lower.contains("create") {
        return Methodology::Constructive;
    }
    if lower.contains("review") || lower.contains("survey") {
        return Methodology::Review;
    }
    if lower.contains("simulation") || lower.contains("model") {
        return Methodology::Computational;
    }
    Methodology::Investigative
}

fn detect_scope(lower: &str) -> Scope {
    if lower.contains("comprehensive") || lower.contains("complete") || lower.contains("full") {
        return Scope::Comprehensive;
    }
    if lower.contains("comparative") || lower.contains("comparison") {
        return Scope::Comparative;
    }
    if lower.contains("case study") || lower.contains("specific") {
        return Scope::Focused;
    }
    if lower.contains("survey") || lower.contains("overview") {
        return Scope::Broad;
    }
    Scope::Standard
}

fn detect_focus(lower: &str) -> Focus {
    if lower.contains("impact") || lower.contains("effect") {
        return Focus::Impact;
    }
    if lower.contains("optimization") || lower.contains("improve") {
        return Focus::Optimization;
    }
    if lower.contains("comparison") || lower.contains("versus") {
        return Focus::Comparison;
    }
    if lower.contains("development") || lower.contains("evolution") {
        return Focus::Development;
    }
    Focus::Exploration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_priority_research_before_analysis() {
        // Both keywords present; research is checked first
        let analysis = TitleAnalysis::from_title("Research Analysis of Tides");
        assert_eq!(analysis.project_type, ProjectType::Research);
    }

    #[test]
    fn test_type_detection_each_branch() {
        let cases = [
            ("An Investigation of Sleep", ProjectType::Research),
            ("Analyze Market Trends", ProjectType::Analysis),
            ("Persuasive Essay Draft", ProjectType::Paper),
            ("Final Speech Notes", ProjectType::Presentation),
            ("Titration Lab", ProjectType::Experiment),
            ("Build a Weather Station", ProjectType::Project),
            ("Literature Survey on Memory", ProjectType::Review),
            ("Examination of Voting Patterns", ProjectType::Study),
            ("Quarterly Report", ProjectType::Report),
            ("Photosynthesis Basics", ProjectType::Project),
        ];
        for (title, expected) in cases {
            assert_eq!(
                TitleAnalysis::from_title(title).project_type,
                expected,
                "title: {}",
                title
            );
        }
    }

    #[test]
    fn test_methodology_detection() {
        assert_eq!(
            TitleAnalysis::from_title("Pendulum Experiment").methodology,
            Methodology::Experimental
        );
        assert_eq!(
            TitleAnalysis::from_title("Cost Analysis").methodology,
            Methodology::Analytical
        );
        assert_eq!(
            TitleAnalysis::from_title("Design a Bridge").methodology,
            Methodology::Constructive
        );
        assert_eq!(
            TitleAnalysis::from_title("Survey of Methods").methodology,
            Methodology::Review
        );
        assert_eq!(
            TitleAnalysis::from_title("Climate Model Comparison").methodology,
            Methodology::Computational
        );
        assert_eq!(
            TitleAnalysis::from_title("Tides").methodology,
            Methodology::Investigative
        );
    }

    #[test]
    fn test_methodology_substring_scan_hits_inside_words() {
        // "lab" inside "collaboration" still matches the experimental branch
        assert_eq!(
            TitleAnalysis::from_title("Collaboration Patterns").methodology,
            Methodology::Experimental
        );
    }

    #[test]
    fn test_scope_detection() {
        assert_eq!(
            TitleAnalysis::from_title("Comprehensive Guide").scope,
            Scope::Comprehensive
        );
        assert_eq!(
            TitleAnalysis::from_title("Comparison of Two Engines").scope,
            Scope::Comparative
        );
        assert_eq!(
            TitleAnalysis::from_title("Case Study: Enron").scope,
            Scope::Focused
        );
        assert_eq!(
            TitleAnalysis::from_title("Overview of Genetics").scope,
            Scope::Broad
        );
        assert_eq!(TitleAnalysis::from_title("Tides").scope, Scope::Standard);
    }

    #[test]
    fn test_focus_detection() {
        assert_eq!(
            TitleAnalysis::from_title("Effect of Caffeine").focus,
            Focus::Impact
        );
        assert_eq!(
            TitleAnalysis::from_title("Improve Engine Efficiency").focus,
            Focus::Optimization
        );
        assert_eq!(
            TitleAnalysis::from_title("Python versus Rust").focus,
            Focus::Comparison
        );
        assert_eq!(
            TitleAnalysis::from_title("Evolution of Birds").focus,
            Focus::Development
        );
        assert_eq!(TitleAnalysis::from_title("Tides").focus, Focus::Exploration);
    }

    #[test]
    fn test_empty_title_gets_all_defaults() {
        let analysis = TitleAnalysis::from_title("");
        assert_eq!(analysis.project_type, ProjectType::Project);
        assert_eq!(analysis.methodology, Methodology::Investigative);
        assert_eq!(analysis.scope, Scope::Standard);
        assert_eq!(analysis.focus, Focus::Exploration);
        assert!(analysis.main_concepts.is_empty());
    }
}
