//! In-memory project directory.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::scrum::{
    domain::Project,
    ports::{ProjectDirectory, ProjectDirectoryError, ProjectDirectoryResult},
};

/// Thread-safe in-memory project directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectDirectory {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectDirectory {
    /// Creates a directory listing the given projects.
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(RwLock::new(projects)),
        }
    }

    /// Appends a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDirectoryError::Unavailable`] if the lock is poisoned.
    pub fn add(&self, project: Project) -> ProjectDirectoryResult<()> {
        let mut projects = self.projects.write().map_err(lock_error)?;
        projects.push(project);
        Ok(())
    }
}

fn lock_error(err: impl ToString) -> ProjectDirectoryError {
    ProjectDirectoryError::unavailable(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectDirectory for InMemoryProjectDirectory {
    async fn list_projects(&self) -> ProjectDirectoryResult<Vec<Project>> {
        let projects = self.projects.read().map_err(lock_error)?;
        Ok(projects.clone())
    }
}
