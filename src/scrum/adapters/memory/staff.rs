//! In-memory staff directory.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::scrum::{
    domain::StaffMember,
    ports::{StaffDirectory, StaffDirectoryError, StaffDirectoryResult},
};

/// Thread-safe in-memory staff directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStaffDirectory {
    members: Arc<RwLock<Vec<StaffMember>>>,
}

impl InMemoryStaffDirectory {
    /// Creates a directory listing the given members.
    #[must_use]
    pub fn new(members: Vec<StaffMember>) -> Self {
        Self {
            members: Arc::new(RwLock::new(members)),
        }
    }

    /// Appends a member.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::Unavailable`] if the lock is poisoned.
    pub fn add(&self, member: StaffMember) -> StaffDirectoryResult<()> {
        let mut members = self.members.write().map_err(lock_error)?;
        members.push(member);
        Ok(())
    }
}

fn lock_error(err: impl ToString) -> StaffDirectoryError {
    StaffDirectoryError::unavailable(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl StaffDirectory for InMemoryStaffDirectory {
    async fn list_staff(&self) -> StaffDirectoryResult<Vec<StaffMember>> {
        let members = self.members.read().map_err(lock_error)?;
        Ok(members.clone())
    }
}
