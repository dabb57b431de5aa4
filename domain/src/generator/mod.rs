//! Rule-based project description generator.
//!
//! A small pipeline of pure functions synthesizes a plausible multi-sentence
//! description from a project title and subject:
//!
//! 1. [`TitleAnalysis`] classifies the title into type/methodology/scope/
//!    focus tags and extracts up to three salient phrases.
//! 2. [`infer_domain`] votes an academic domain from keyword overlap.
//! 3. [`template_for`] dispatches to a per-domain template that composes
//!    the final prose.
//!
//! The whole pipeline is deterministic and synchronous: no I/O, no
//! randomness, no shared mutable state. The vocabulary tables and template
//! mapping are process-wide constants.

pub mod analysis;
pub mod classifier;
pub mod concepts;
pub mod templates;

pub use analysis::{Focus, Methodology, ProjectType, Scope, TitleAnalysis};
pub use classifier::{AcademicDomain, infer_domain};
pub use concepts::extract_main_concepts;
pub use templates::{DomainTemplate, template_for};

/// Generate a project description from a title and subject.
///
/// `subject` may be empty; it only contributes keywords to domain
/// inference. An empty `title` does not fail — it degrades to the general
/// template with a fallback topic phrase.
///
/// # Example
///
/// ```
/// use studytrack_domain::generator::generate_description;
///
/// let text = generate_description("Quantum Tunneling Effects in Semiconductor Devices", "Physics");
/// assert!(text.starts_with("This physics project investigates Quantum"));
/// ```
pub fn generate_description(title: &str, subject: &str) -> String {
    let analysis = TitleAnalysis::from_title(title);
    let domain = infer_domain(title, subject);

    template_for(domain).generate(&analysis, title, subject)
}
