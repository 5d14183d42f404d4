//! Staff directory entries used to label assignees.

use super::StaffId;
use serde::{Deserialize, Serialize};

/// Label shown for tasks without a known assignee.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// A member of staff who can be assigned design tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Directory identifier.
    pub id: StaffId,
    /// Display name.
    pub name: String,
}

impl StaffMember {
    /// Creates a staff entry.
    #[must_use]
    pub fn new(id: StaffId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Snapshot of the staff directory in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffRoster {
    members: Vec<StaffMember>,
}

impl StaffRoster {
    /// Wraps directory entries.
    #[must_use]
    pub const fn new(members: Vec<StaffMember>) -> Self {
        Self { members }
    }

    /// Returns the members in directory order.
    #[must_use]
    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    /// Returns `true` when the id belongs to a listed member.
    #[must_use]
    pub fn contains(&self, id: StaffId) -> bool {
        self.members.iter().any(|member| member.id == id)
    }

    /// Display name for an assignee; unknown or absent ids read
    /// "Unassigned".
    #[must_use]
    pub fn label(&self, assignee: Option<StaffId>) -> &str {
        assignee
            .and_then(|id| self.members.iter().find(|member| member.id == id))
            .map_or(UNASSIGNED_LABEL, |member| member.name.as_str())
    }
}
