//! JSON file adapter for the project repository port.
//!
//! The whole collection lives in one JSON array. Every operation reads and
//! reparses the file, mutations rewrite it completely — the store is a
//! best-effort local file, not a database, and collections stay small
//! enough that this is the simplest correct thing.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use studytrack_application::ports::project_repository::{ProjectRepository, RepositoryError};
use studytrack_domain::{Project, ProjectId};
use tracing::{debug, warn};

/// File name inside the per-user data directory.
const STORE_FILE: &str = "projects.json";
/// Directory under the platform data dir.
const APP_DIR: &str = "studytrack";

/// Project repository backed by a single JSON file.
pub struct JsonProjectStore {
    path: PathBuf,
}

impl JsonProjectStore {
    /// Create a store at an explicit path. The file is created lazily on
    /// first write; a missing file reads as an empty collection.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Default store location: `<data_dir>/studytrack/projects.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join(STORE_FILE))
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Project>, RepositoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                warn!("Corrupt store file {}: {}", self.path.display(), e);
                RepositoryError::Serialization(e.to_string())
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store file {} not found, starting empty", self.path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(RepositoryError::Io(e.to_string())),
        }
    }

    fn save(&self, projects: &[Project]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RepositoryError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(projects)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| RepositoryError::Io(e.to_string()))?;

        debug!(
            "Wrote {} projects to {}",
            projects.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for JsonProjectStore {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        self.load()
    }

    async fn get(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError> {
        Ok(self.load()?.into_iter().find(|p| &p.id == id))
    }

    async fn insert(&self, project: Project) -> Result<(), RepositoryError> {
        let mut projects = self.load()?;
        projects.push(project);
        self.save(&projects)
    }

    async fn update(&self, project: Project) -> Result<bool, RepositoryError> {
        let mut projects = self.load()?;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                self.save(&projects)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ProjectId) -> Result<bool, RepositoryError> {
        let mut projects = self.load()?;
        let before = projects.len();
        projects.retain(|p| &p.id != id);

        if projects.len() == before {
            return Ok(false);
        }
        self.save(&projects)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use studytrack_domain::{ProjectDraft, ProjectStatus};

    fn sample(title: &str) -> Project {
        Project::create(
            ProjectDraft::new(title, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProjectStore::new(dir.path().join("projects.json"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");

        let store = JsonProjectStore::new(&path);
        let project = sample("Essay");
        let id = project.id.clone();
        store.insert(project).await.unwrap();

        // Fresh handle over the same file
        let reopened = JsonProjectStore::new(&path);
        let loaded = reopened.get(&id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "Essay");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProjectStore::new(dir.path().join("projects.json"));

        let mut project = sample("Essay");
        let id = project.id.clone();
        store.insert(project.clone()).await.unwrap();

        project.set_status(ProjectStatus::Completed, Utc::now());
        assert!(store.update(project).await.unwrap());
        assert_eq!(
            store.get(&id).await.unwrap().unwrap().status,
            ProjectStatus::Completed
        );

        assert!(store.delete(&id).await.unwrap());
        assert!(!store.delete(&id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_false_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        let store = JsonProjectStore::new(&path);

        assert!(!store.update(sample("Ghost")).await.unwrap());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deeply").join("nested").join("projects.json");
        let store = JsonProjectStore::new(&path);

        store.insert(sample("Essay")).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonProjectStore::new(&path);
        let result = store.list().await;
        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }
}
