//! Store port for project scrum boards.

use crate::scrum::domain::{JobNumber, ScrumBoard};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Board persistence contract.
///
/// Boards are read and written whole. A save replaces the stored board in a
/// single step: readers observe either the previous board or the new one.
/// Concurrent writers are not reconciled; the last save wins.
#[async_trait]
pub trait ScrumBoardStore: Send + Sync {
    /// Loads the board of a project.
    ///
    /// Returns `None` when the project has no board yet.
    async fn load_board(&self, job_no: &JobNumber) -> BoardStoreResult<Option<ScrumBoard>>;

    /// Stores the board, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the write fails; the
    /// previously stored board is left unchanged.
    async fn save_board(&self, board: &ScrumBoard) -> BoardStoreResult<()>;

    /// Loads every stored board, ordered by job number.
    async fn list_boards(&self) -> BoardStoreResult<Vec<ScrumBoard>>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
