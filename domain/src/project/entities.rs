//! Project domain entities

use super::value_objects::{ChecklistTaskId, Priority, ProjectId, ProjectStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a project's checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistTask {
    /// Unique identifier for this entry
    pub id: ChecklistTaskId,
    /// What needs to be done
    pub text: String,
    /// Whether the entry has been ticked off
    pub completed: bool,
}

impl ChecklistTask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ChecklistTaskId::generate(),
            text: text.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// User-supplied fields for creating a project, before validation.
///
/// Ids and audit timestamps are assigned by [`Project::create`], never by
/// the caller.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub priority: Priority,
    pub status: ProjectStatus,
    pub deadline: NaiveDate,
    /// Initial checklist entries (text only)
    pub tasks: Vec<String>,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            subject: String::new(),
            priority: Priority::default(),
            status: ProjectStatus::default(),
            deadline,
            tasks: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_task(mut self, text: impl Into<String>) -> Self {
        self.tasks.push(text.into());
        self
    }
}

/// Field updates for an existing project.
///
/// `None` means "leave unchanged". Checklist entries are edited through
/// [`Project::add_task`] / [`Project::toggle_task`] instead.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<ProjectStatus>,
    pub deadline: Option<NaiveDate>,
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.subject.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.deadline.is_none()
    }
}

/// A tracked project with an embedded checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,
    /// Project title
    pub title: String,
    /// Free-form description (possibly generated, always editable)
    pub description: String,
    /// Subject or course the project belongs to
    pub subject: String,
    /// Priority level
    pub priority: Priority,
    /// Current status
    pub status: ProjectStatus,
    /// Due date
    pub deadline: NaiveDate,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
    /// Embedded checklist
    #[serde(default)]
    pub tasks: Vec<ChecklistTask>,
}

impl Project {
    /// Materialize a validated draft into a project with a fresh id and
    /// audit timestamps.
    pub fn create(draft: ProjectDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: ProjectId::generate(),
            title: draft.title,
            description: draft.description,
            subject: draft.subject,
            priority: draft.priority,
            status: draft.status,
            deadline: draft.deadline,
            created_at: now,
            updated_at: now,
            tasks: draft.tasks.into_iter().map(ChecklistTask::new).collect(),
        }
    }

    /// Apply field updates, bumping `updated_at`.
    pub fn apply(&mut self, changes: ProjectChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(subject) = changes.subject {
            self.subject = subject;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(deadline) = changes.deadline {
            self.deadline = deadline;
        }
        self.updated_at = now;
    }

    /// Change the status directly (the card's quick status selector).
    pub fn set_status(&mut self, status: ProjectStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    /// Append a checklist entry, returning its id.
    pub fn add_task(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> ChecklistTaskId {
        let task = ChecklistTask::new(text);
        let id = task.id.clone();
        self.tasks.push(task);
        self.updated_at = now;
        id
    }

    /// Toggle a checklist entry by id. Returns false when the id is unknown.
    pub fn toggle_task(&mut self, task_id: &ChecklistTaskId, now: DateTime<Utc>) -> bool {
        match self.tasks.iter_mut().find(|t| &t.id == task_id) {
            Some(task) => {
                task.toggle();
                self.updated_at = now;
                true
            }
            None => false,
        }
    }

    /// Checklist progress as (completed, total).
    pub fn task_progress(&self) -> (usize, usize) {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        (completed, self.tasks.len())
    }
}
