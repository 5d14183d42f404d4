//! Cross-project read models over all stored boards.

use crate::scrum::{
    domain::{
        Agenda, AgendaEntry, AssigneeWorkload, DesignSummary, StaffRoster, due_between,
        workload_by_assignee,
    },
    ports::{BoardStoreError, ScrumBoardStore, StaffDirectory, StaffDirectoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for overview queries.
#[derive(Debug, Error)]
pub enum OverviewError {
    /// Boards could not be listed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
    /// Staff could not be listed.
    #[error(transparent)]
    Staff(#[from] StaffDirectoryError),
}

/// Result type for overview queries.
pub type OverviewResult<T> = Result<T, OverviewError>;

/// Read-only views of open work across projects.
#[derive(Clone)]
pub struct OverviewService<B, D, K>
where
    B: ScrumBoardStore,
    D: StaffDirectory,
    K: Clock + Send + Sync,
{
    store: Arc<B>,
    directory: Arc<D>,
    clock: Arc<K>,
}

impl<B, D, K> OverviewService<B, D, K>
where
    B: ScrumBoardStore,
    D: StaffDirectory,
    K: Clock + Send + Sync,
{
    /// Creates a new overview service.
    #[must_use]
    pub const fn new(store: Arc<B>, directory: Arc<D>, clock: Arc<K>) -> Self {
        Self {
            store,
            directory,
            clock,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Headline counts relative to today.
    ///
    /// # Errors
    ///
    /// Returns [`OverviewError::Store`] when boards cannot be listed.
    pub async fn summary(&self) -> OverviewResult<DesignSummary> {
        let boards = self.store.list_boards().await?;
        Ok(DesignSummary::from_boards(&boards, self.today()))
    }

    /// Dated open tasks grouped by how soon they fall due.
    ///
    /// # Errors
    ///
    /// Returns [`OverviewError::Store`] when boards cannot be listed.
    pub async fn agenda(&self) -> OverviewResult<Agenda> {
        let boards = self.store.list_boards().await?;
        Ok(Agenda::from_boards(&boards, self.today()))
    }

    /// Open tasks per staff member, in directory order.
    ///
    /// # Errors
    ///
    /// Returns [`OverviewError::Store`] or [`OverviewError::Staff`] when a
    /// lookup fails.
    pub async fn workload(&self) -> OverviewResult<Vec<AssigneeWorkload>> {
        let roster = StaffRoster::new(self.directory.list_staff().await?);
        let boards = self.store.list_boards().await?;
        Ok(workload_by_assignee(&boards, &roster))
    }

    /// Open tasks whose due date fell between `since` (inclusive) and today
    /// (exclusive).
    ///
    /// # Errors
    ///
    /// Returns [`OverviewError::Store`] when boards cannot be listed.
    pub async fn due_since(&self, since: NaiveDate) -> OverviewResult<Vec<AgendaEntry>> {
        let boards = self.store.list_boards().await?;
        Ok(due_between(&boards, since, self.today()))
    }
}
