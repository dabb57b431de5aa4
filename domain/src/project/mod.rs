//! Project tracking domain: entities, validation, scheduling, queries.

pub mod entities;
pub mod query;
pub mod schedule;
pub mod stats;
pub mod validation;
pub mod value_objects;

pub use entities::{ChecklistTask, Project, ProjectChanges, ProjectDraft};
pub use query::{PriorityFilter, ProjectQuery, SortKey, StatusFilter};
pub use schedule::{days_until, is_overdue, status_text};
pub use stats::ProjectStats;
pub use validation::{ValidationIssue, ValidationIssueCode, validate_draft, validate_fields};
pub use value_objects::{ChecklistTaskId, Priority, ProjectId, ProjectStatus};
