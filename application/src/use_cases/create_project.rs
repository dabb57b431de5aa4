//! Create Project use case

use crate::ports::project_repository::{ProjectRepository, RepositoryError};
use chrono::Utc;
use std::sync::Arc;
use studytrack_domain::{Project, ProjectDraft, ValidationIssue, validate_draft};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while creating a project
#[derive(Error, Debug)]
pub enum CreateProjectError {
    #[error("Draft validation failed")]
    Validation { issues: Vec<ValidationIssue> },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for creating a project from a draft
pub struct CreateProjectUseCase<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> CreateProjectUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate the draft, materialize it, and persist it.
    pub async fn execute(&self, draft: ProjectDraft) -> Result<Project, CreateProjectError> {
        let issues = validate_draft(&draft);
        if !issues.is_empty() {
            return Err(CreateProjectError::Validation { issues });
        }

        let project = Project::create(draft, Utc::now());
        info!("Creating project {} ({})", project.id, project.title);

        self.repository.insert(project.clone()).await?;
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::project_repository::InMemoryProjectRepository;
    use chrono::NaiveDate;

    fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    #[tokio::test]
    async fn test_create_persists_project() {
        let repo = Arc::new(InMemoryProjectRepository::new());
        let use_case = CreateProjectUseCase::new(repo.clone());

        let created = use_case
            .execute(ProjectDraft::new("Photosynthesis Lab", deadline()).with_task("Grow plants"))
            .await
            .unwrap();

        let stored = repo.get(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Photosynthesis Lab");
        assert_eq!(stored.tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_rejected_and_not_stored() {
        let repo = Arc::new(InMemoryProjectRepository::new());
        let use_case = CreateProjectUseCase::new(repo.clone());

        let result = use_case.execute(ProjectDraft::new("  ", deadline())).await;
        match result {
            Err(CreateProjectError::Validation { issues }) => assert_eq!(issues.len(), 1),
            other => panic!("expected validation error, got {:?}", other.map(|p| p.title)),
        }

        assert!(repo.list().await.unwrap().is_empty());
    }
}
