//! In-memory adapter implementations.

mod board;
mod project;
mod staff;

pub use board::InMemoryBoardStore;
pub use project::InMemoryProjectDirectory;
pub use staff::InMemoryStaffDirectory;
