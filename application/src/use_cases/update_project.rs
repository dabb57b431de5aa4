//! Update Project use case
//!
//! Covers field edits, the quick status change, and checklist operations —
//! everything that mutates an existing project.

use crate::ports::project_repository::{ProjectRepository, RepositoryError};
use chrono::Utc;
use std::sync::Arc;
use studytrack_domain::{
    ChecklistTaskId, Project, ProjectChanges, ProjectId, ProjectStatus, ValidationIssue,
    validate_fields,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while updating a project
#[derive(Error, Debug)]
pub enum UpdateProjectError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Checklist entry not found: {0}")]
    TaskNotFound(ChecklistTaskId),

    #[error("Update validation failed")]
    Validation { issues: Vec<ValidationIssue> },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for mutating an existing project
pub struct UpdateProjectUseCase<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> UpdateProjectUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Apply field changes to a project and persist the result.
    pub async fn execute(
        &self,
        id: &ProjectId,
        changes: ProjectChanges,
    ) -> Result<Project, UpdateProjectError> {
        let mut project = self.load(id).await?;
        project.apply(changes, Utc::now());

        let issues = validate_fields(&project.title, &project.description, &project.subject);
        if !issues.is_empty() {
            return Err(UpdateProjectError::Validation { issues });
        }

        info!("Updating project {}", project.id);
        self.store(project).await
    }

    /// The card's quick status selector.
    pub async fn set_status(
        &self,
        id: &ProjectId,
        status: ProjectStatus,
    ) -> Result<Project, UpdateProjectError> {
        let mut project = self.load(id).await?;
        project.set_status(status, Utc::now());
        debug!("Project {} status -> {}", project.id, status);
        self.store(project).await
    }

    /// Append a checklist entry.
    pub async fn add_task(
        &self,
        id: &ProjectId,
        text: impl Into<String> + Send,
    ) -> Result<Project, UpdateProjectError> {
        let mut project = self.load(id).await?;
        project.add_task(text, Utc::now());
        self.store(project).await
    }

    /// Toggle a checklist entry's completion state.
    pub async fn toggle_task(
        &self,
        id: &ProjectId,
        task_id: &ChecklistTaskId,
    ) -> Result<Project, UpdateProjectError> {
        let mut project = self.load(id).await?;
        if !project.toggle_task(task_id, Utc::now()) {
            return Err(UpdateProjectError::TaskNotFound(task_id.clone()));
        }
        self.store(project).await
    }

    async fn load(&self, id: &ProjectId) -> Result<Project, UpdateProjectError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| UpdateProjectError::NotFound(id.clone()))
    }

    async fn store(&self, project: Project) -> Result<Project, UpdateProjectError> {
        if !self.repository.update(project.clone()).await? {
            return Err(UpdateProjectError::NotFound(project.id));
        }
        Ok(project)
    }
}
