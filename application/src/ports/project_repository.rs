//! Port for project persistence.
//!
//! Defines the [`ProjectRepository`] trait the use cases depend on. Any
//! backend that can load and store whole projects satisfies it — the
//! default adapter is a local JSON file, but the port makes no durability
//! promises beyond "best effort local store".
//!
//! Filtering, sorting, and stats are deliberately NOT part of the port:
//! they are pure domain functions applied to the loaded list, so every
//! backend behaves identically.

use async_trait::async_trait;
use std::sync::Mutex;
use studytrack_domain::{Project, ProjectId};
use thiserror::Error;

/// Errors from the persistence backend
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage format error: {0}")]
    Serialization(String),
}

/// Port for storing and retrieving projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Load all projects, in storage order.
    async fn list(&self) -> Result<Vec<Project>, RepositoryError>;

    /// Look up a single project by id.
    async fn get(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError>;

    /// Persist a new project.
    async fn insert(&self, project: Project) -> Result<(), RepositoryError>;

    /// Replace a stored project. Returns false when the id is unknown.
    async fn update(&self, project: Project) -> Result<bool, RepositoryError>;

    /// Remove a project. Returns false when the id is unknown.
    async fn delete(&self, id: &ProjectId) -> Result<bool, RepositoryError>;
}

/// In-memory implementation for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: Mutex<Vec<Project>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn get(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn insert(&self, project: Project) -> Result<(), RepositoryError> {
        self.projects.lock().unwrap().push(project);
        Ok(())
    }

    async fn update(&self, project: Project) -> Result<bool, RepositoryError> {
        let mut projects = self.projects.lock().unwrap();
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ProjectId) -> Result<bool, RepositoryError> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| &p.id != id);
        Ok(projects.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use studytrack_domain::ProjectDraft;

    fn sample() -> Project {
        Project::create(
            ProjectDraft::new("Essay", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_insert_get_delete_roundtrip() {
        let repo = InMemoryProjectRepository::new();
        let project = sample();
        let id = project.id.clone();

        repo.insert(project.clone()).await.unwrap();
        assert_eq!(repo.get(&id).await.unwrap(), Some(project));
        assert!(repo.delete(&id).await.unwrap());
        assert_eq!(repo.get(&id).await.unwrap(), None);
        assert!(!repo.delete(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_false() {
        let repo = InMemoryProjectRepository::new();
        assert!(!repo.update(sample()).await.unwrap());
    }
}
