//! Project value objects - identifiers and enumerated attributes.
//!
//! # Identifiers
//! - [`ProjectId`] - Unique identifier for a tracked project
//! - [`ChecklistTaskId`] - Unique identifier for a checklist entry
//!
//! # Attributes
//! - [`Priority`] - Low / Medium / High
//! - [`ProjectStatus`] - Not started / In progress / Completed

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a tracked project.
///
/// Generated ids have the shape `proj_<unix-millis>_<seq>` so they stay
/// readable in the store file and sort roughly by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a ProjectId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique ProjectId.
    pub fn generate() -> Self {
        Self(format!("proj_{}_{:04}", current_timestamp(), next_seq()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for ProjectId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a checklist entry within a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChecklistTaskId(String);

impl ChecklistTaskId {
    /// Creates a ChecklistTaskId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique ChecklistTaskId.
    pub fn generate() -> Self {
        Self(format!("task_{}_{:04}", current_timestamp(), next_seq()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for ChecklistTaskId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ChecklistTaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority level of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Sort rank: high priority sorts first.
    pub fn sort_rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "l" => Ok(Priority::Low),
            "medium" | "m" => Ok(Priority::Medium),
            "high" | "h" => Ok(Priority::High),
            other => Err(DomainError::InvalidPriority(other.to_string())),
        }
    }
}

/// Status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    /// Work has not begun yet
    #[default]
    #[serde(rename = "not-started")]
    NotStarted,
    /// Work is underway
    #[serde(rename = "in-progress")]
    InProgress,
    /// Project is finished
    #[serde(rename = "completed")]
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::NotStarted => "not-started",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ProjectStatus::Completed)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not-started" | "not_started" | "notstarted" => Ok(ProjectStatus::NotStarted),
            "in-progress" | "in_progress" | "inprogress" => Ok(ProjectStatus::InProgress),
            "completed" | "done" => Ok(ProjectStatus::Completed),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Process-wide sequence so ids generated within the same millisecond differ.
fn next_seq() -> u64 {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    SEQ.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_from_str() {
        let id = ProjectId::new("proj_123_0001");
        assert_eq!(id.as_str(), "proj_123_0001");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ProjectId::generate();
        let b = ProjectId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("proj_"));

        let t = ChecklistTaskId::generate();
        assert!(t.as_str().starts_with("task_"));
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("high".parse::<Priority>().ok(), Some(Priority::High));
        assert_eq!("M".parse::<Priority>().ok(), Some(Priority::Medium));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_sort_rank() {
        assert!(Priority::High.sort_rank() < Priority::Medium.sort_rank());
        assert!(Priority::Medium.sort_rank() < Priority::Low.sort_rank());
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!(
            "in-progress".parse::<ProjectStatus>().ok(),
            Some(ProjectStatus::InProgress)
        );
        assert_eq!(ProjectStatus::NotStarted.display_name(), "Not Started");
        assert!("paused".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_status_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not-started\"");

        let parsed: ProjectStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, ProjectStatus::InProgress);
    }

    #[test]
    fn test_priority_serde_roundtrip() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
        let parsed: Priority = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Priority::High);
    }
}
