//! Read-only project directory port.

use crate::scrum::domain::Project;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project directory operations.
pub type ProjectDirectoryResult<T> = Result<T, ProjectDirectoryError>;

/// Source of project types for bulk task additions.
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// Lists every project in directory order.
    async fn list_projects(&self) -> ProjectDirectoryResult<Vec<Project>>;
}

/// Errors returned by project directory implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectDirectoryError {
    /// Directory lookup failed.
    #[error("project directory error: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectDirectoryError {
    /// Wraps a lookup error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
