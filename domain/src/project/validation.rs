//! Draft validation for project creation and editing.
//!
//! Returns structured issues rather than failing on the first problem, so
//! the presentation layer can show everything wrong with a form at once.

use super::entities::ProjectDraft;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 100;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;
/// Maximum subject length in characters.
pub const MAX_SUBJECT_LEN: usize = 50;

/// Identifies a specific problem with a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssueCode {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Title exceeds [`MAX_TITLE_LEN`] characters.
    TitleTooLong,
    /// Description exceeds [`MAX_DESCRIPTION_LEN`] characters.
    DescriptionTooLong,
    /// Subject exceeds [`MAX_SUBJECT_LEN`] characters.
    SubjectTooLong,
}

/// A detected problem with a draft.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub code: ValidationIssueCode,
    pub message: String,
}

impl ValidationIssue {
    fn new(code: ValidationIssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validate a draft. An empty result means the draft is acceptable.
pub fn validate_draft(draft: &ProjectDraft) -> Vec<ValidationIssue> {
    validate_fields(&draft.title, &draft.description, &draft.subject)
}

/// Validate the free-text fields of a project, new or existing.
///
/// Character counts use `chars().count()`, not bytes, so multibyte titles
/// are not penalized.
pub fn validate_fields(title: &str, description: &str, subject: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let title = title.trim();
    if title.is_empty() {
        issues.push(ValidationIssue::new(
            ValidationIssueCode::EmptyTitle,
            "Project title is required",
        ));
    } else if title.chars().count() > MAX_TITLE_LEN {
        issues.push(ValidationIssue::new(
            ValidationIssueCode::TitleTooLong,
            format!("Title must be less than {} characters", MAX_TITLE_LEN),
        ));
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        issues.push(ValidationIssue::new(
            ValidationIssueCode::DescriptionTooLong,
            format!(
                "Description must be less than {} characters",
                MAX_DESCRIPTION_LEN
            ),
        ));
    }

    if subject.chars().count() > MAX_SUBJECT_LEN {
        issues.push(ValidationIssue::new(
            ValidationIssueCode::SubjectTooLong,
            format!("Subject must be less than {} characters", MAX_SUBJECT_LEN),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft::new(title, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
    }

    #[test]
    fn test_valid_draft_has_no_issues() {
        let issues = validate_draft(&draft("Photosynthesis Lab Report"));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_empty_title_rejected() {
        let issues = validate_draft(&draft("   "));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ValidationIssueCode::EmptyTitle);
    }

    #[test]
    fn test_overlong_title_rejected() {
        let issues = validate_draft(&draft(&"x".repeat(MAX_TITLE_LEN + 1)));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ValidationIssueCode::TitleTooLong);
    }

    #[test]
    fn test_title_at_limit_accepted() {
        let issues = validate_draft(&draft(&"x".repeat(MAX_TITLE_LEN)));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_multiple_issues_reported_together() {
        let d = draft("")
            .with_description("d".repeat(MAX_DESCRIPTION_LEN + 1))
            .with_subject("s".repeat(MAX_SUBJECT_LEN + 1));
        let issues = validate_draft(&d);
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_char_counting_not_bytes() {
        // 50 multibyte chars is exactly at the subject limit
        let d = draft("ok").with_subject("あ".repeat(MAX_SUBJECT_LEN));
        assert!(validate_draft(&d).is_empty());
    }
}
