//! Port contracts for scrum boards.
//!
//! Ports define infrastructure-agnostic interfaces used by scrum services.

pub mod board_store;
pub mod project_directory;
pub mod staff_directory;

pub use board_store::{BoardStoreError, BoardStoreResult, ScrumBoardStore};
pub use project_directory::{ProjectDirectory, ProjectDirectoryError, ProjectDirectoryResult};
pub use staff_directory::{StaffDirectory, StaffDirectoryError, StaffDirectoryResult};
