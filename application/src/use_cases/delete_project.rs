//! Delete Project use case

use crate::ports::project_repository::{ProjectRepository, RepositoryError};
use std::sync::Arc;
use studytrack_domain::{Project, ProjectId};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while deleting a project
#[derive(Error, Debug)]
pub enum DeleteProjectError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for removing a project
pub struct DeleteProjectUseCase<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> DeleteProjectUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Delete by id, returning the removed project so callers can name it.
    pub async fn execute(&self, id: &ProjectId) -> Result<Project, DeleteProjectError> {
        let project = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DeleteProjectError::NotFound(id.clone()))?;

        if !self.repository.delete(id).await? {
            return Err(DeleteProjectError::NotFound(id.clone()));
        }

        info!("Deleted project {} ({})", project.id, project.title);
        Ok(project)
    }
}
