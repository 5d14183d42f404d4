//! Read-only staff directory port.

use crate::scrum::domain::StaffMember;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for staff directory operations.
pub type StaffDirectoryResult<T> = Result<T, StaffDirectoryError>;

/// Source of staff names for labelling assignees.
#[async_trait]
pub trait StaffDirectory: Send + Sync {
    /// Lists staff in directory order.
    async fn list_staff(&self) -> StaffDirectoryResult<Vec<StaffMember>>;
}

/// Errors returned by staff directory implementations.
#[derive(Debug, Clone, Error)]
pub enum StaffDirectoryError {
    /// Directory lookup failed.
    #[error("staff directory error: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl StaffDirectoryError {
    /// Wraps a lookup error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
