//! Generate Description use case
//!
//! Thin boundary around the domain generator: rejects the one contract
//! violation (an empty title) before handing off to the pure pipeline.
//! The generator itself never fails.

use studytrack_domain::generator::generate_description;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when requesting a generated description
#[derive(Error, Debug)]
pub enum GenerateDescriptionError {
    #[error("Please enter a project title first")]
    EmptyTitle,
}

/// Input for the GenerateDescription use case
#[derive(Debug, Clone)]
pub struct GenerateDescriptionInput {
    pub title: String,
    pub subject: String,
}

impl GenerateDescriptionInput {
    pub fn new(title: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
        }
    }
}

/// Use case for generating a project description
#[derive(Default)]
pub struct GenerateDescriptionUseCase;

impl GenerateDescriptionUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Generate a description, validating the title is present.
    pub fn execute(
        &self,
        input: GenerateDescriptionInput,
    ) -> Result<String, GenerateDescriptionError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(GenerateDescriptionError::EmptyTitle);
        }

        let description = generate_description(title, input.subject.trim());
        debug!(
            "Generated {}-byte description for '{}'",
            description.len(),
            title
        );
        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_is_rejected() {
        let use_case = GenerateDescriptionUseCase::new();
        let result = use_case.execute(GenerateDescriptionInput::new("  ", "Physics"));
        assert!(matches!(result, Err(GenerateDescriptionError::EmptyTitle)));
    }

    #[test]
    fn test_generates_for_valid_title() {
        let use_case = GenerateDescriptionUseCase::new();
        let text = use_case
            .execute(GenerateDescriptionInput::new(
                "Quantum Tunneling Effects in Semiconductor Devices",
                "Physics",
            ))
            .unwrap();
        assert!(text.starts_with("This physics project investigates"));
    }
}
