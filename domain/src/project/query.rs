//! Filtering and sorting of the project list.
//!
//! These are pure functions over an already-loaded list, so every
//! repository backend gets identical query semantics.

use super::entities::Project;
use super::schedule::is_overdue;
use super::value_objects::{Priority, ProjectStatus};
use crate::core::error::DomainError;
use chrono::NaiveDate;

/// Status filter for the project list.
///
/// `Overdue` is a pseudo-status computed from deadline and status, not a
/// stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Overdue,
    Is(ProjectStatus),
}

impl std::str::FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "overdue" => Ok(StatusFilter::Overdue),
            other => other
                .parse::<ProjectStatus>()
                .map(StatusFilter::Is)
                .map_err(|_| DomainError::InvalidStatusFilter(other.to_string())),
        }
    }
}

/// Priority filter for the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Is(Priority),
}

impl std::str::FromStr for PriorityFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(PriorityFilter::All),
            other => other.parse::<Priority>().map(PriorityFilter::Is),
        }
    }
}

/// Sort order for the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Soonest deadline first
    #[default]
    Deadline,
    /// Newest first
    Created,
    /// Lexicographic by title
    Title,
    /// High priority first
    Priority,
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Deadline => "deadline",
            SortKey::Created => "created",
            SortKey::Title => "title",
            SortKey::Priority => "priority",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deadline" => Ok(SortKey::Deadline),
            "created" => Ok(SortKey::Created),
            "title" => Ok(SortKey::Title),
            "priority" => Ok(SortKey::Priority),
            other => Err(DomainError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Combined filter + sort settings for a listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectQuery {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub sort: SortKey,
}

impl ProjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Apply the query to a loaded list. `today` anchors the overdue filter.
    pub fn apply(&self, mut projects: Vec<Project>, today: NaiveDate) -> Vec<Project> {
        projects.retain(|p| self.matches(p, today));

        match self.sort {
            SortKey::Deadline => projects.sort_by_key(|p| p.deadline),
            SortKey::Created => {
                projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
            SortKey::Title => projects.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Priority => projects.sort_by_key(|p| p.priority.sort_rank()),
        }

        projects
    }

    fn matches(&self, project: &Project, today: NaiveDate) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Overdue => is_overdue(project.deadline, project.status, today),
            StatusFilter::Is(status) => project.status == status,
        };

        let priority_ok = match self.priority {
            PriorityFilter::All => true,
            PriorityFilter::Is(priority) => project.priority == priority,
        };

        status_ok && priority_ok
    }
}
