//! Board store and staff directory adapters.
//!
//! - [`memory::InMemoryBoardStore`] and [`memory::InMemoryStaffDirectory`]:
//!   thread-safe in-memory implementations for tests and embedding
//! - [`json_file::JsonFileBoardStore`]: one JSON document per project inside
//!   a capability-scoped directory, replaced atomically on save

pub mod json_file;
pub mod memory;
