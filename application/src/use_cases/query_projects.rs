//! Query Projects use case
//!
//! Read-side operations: filtered/sorted listings, single-project lookup,
//! and the stats dashboard. Filtering and aggregation are pure domain
//! functions applied to the loaded list.

use crate::ports::project_repository::{ProjectRepository, RepositoryError};
use chrono::NaiveDate;
use std::sync::Arc;
use studytrack_domain::{Project, ProjectId, ProjectQuery, ProjectStats};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while querying projects
#[derive(Error, Debug)]
pub enum QueryProjectsError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for reading projects
pub struct QueryProjectsUseCase<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> QueryProjectsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Filtered, sorted listing. `today` anchors the overdue filter.
    pub async fn list(
        &self,
        query: ProjectQuery,
        today: NaiveDate,
    ) -> Result<Vec<Project>, QueryProjectsError> {
        let projects = self.repository.list().await?;
        debug!("Loaded {} projects", projects.len());
        Ok(query.apply(projects, today))
    }

    /// Single project by id.
    pub async fn get(&self, id: &ProjectId) -> Result<Project, QueryProjectsError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| QueryProjectsError::NotFound(id.clone()))
    }

    /// Dashboard counters over the full list.
    pub async fn stats(&self, today: NaiveDate) -> Result<ProjectStats, QueryProjectsError> {
        let projects = self.repository.list().await?;
        Ok(ProjectStats::collect(&projects, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::project_repository::InMemoryProjectRepository;
    use chrono::Utc;
    use studytrack_domain::{ProjectDraft, ProjectStatus, StatusFilter};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seeded() -> Arc<InMemoryProjectRepository> {
        let repo = Arc::new(InMemoryProjectRepository::new());
        repo.insert(Project::create(
            ProjectDraft::new("Overdue Essay", date(2026, 8, 1))
                .with_status(ProjectStatus::InProgress),
            Utc::now(),
        ))
        .await
        .unwrap();
        repo.insert(Project::create(
            ProjectDraft::new("Future Lab", date(2026, 8, 20)),
            Utc::now(),
        ))
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_list_with_overdue_filter() {
        let use_case = QueryProjectsUseCase::new(seeded().await);
        let query = ProjectQuery::new().with_status(StatusFilter::Overdue);

        let result = use_case.list(query, date(2026, 8, 7)).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Overdue Essay");
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let use_case = QueryProjectsUseCase::new(seeded().await);
        let result = use_case.get(&ProjectId::new("proj_0_0000")).await;
        assert!(matches!(result, Err(QueryProjectsError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_stats() {
        let use_case = QueryProjectsUseCase::new(seeded().await);
        let stats = use_case.stats(date(2026, 8, 7)).await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.in_progress, 1);
    }
}
