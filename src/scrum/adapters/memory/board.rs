//! In-memory board store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::scrum::{
    domain::{JobNumber, ScrumBoard},
    ports::{BoardStoreError, BoardStoreResult, ScrumBoardStore},
};

/// Thread-safe in-memory board store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    boards: Arc<RwLock<BTreeMap<JobNumber, ScrumBoard>>>,
}

impl InMemoryBoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> BoardStoreError {
    BoardStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ScrumBoardStore for InMemoryBoardStore {
    async fn load_board(&self, job_no: &JobNumber) -> BoardStoreResult<Option<ScrumBoard>> {
        let boards = self.boards.read().map_err(lock_error)?;
        Ok(boards.get(job_no).cloned())
    }

    async fn save_board(&self, board: &ScrumBoard) -> BoardStoreResult<()> {
        let mut boards = self.boards.write().map_err(lock_error)?;
        boards.insert(board.job_no().clone(), board.clone());
        Ok(())
    }

    async fn list_boards(&self) -> BoardStoreResult<Vec<ScrumBoard>> {
        let boards = self.boards.read().map_err(lock_error)?;
        Ok(boards.values().cloned().collect())
    }
}
