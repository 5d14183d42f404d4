//! Palladio: design-task boards and working-day due-date scheduling.
//!
//! Every project carries a scrum board of design tasks. The scheduler lays
//! each assignee's open tasks end to end on a working-day calendar that skips
//! weekends and public holidays, honouring task dependencies within an
//! assignee's queue.
//!
//! # Architecture
//!
//! Palladio follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (file store, holiday API)
//!
//! # Modules
//!
//! - [`calendar`]: Working days, weekends and cached public holidays
//! - [`scrum`]: Boards, dependency ordering, scheduling and progress
//! - [`config`]: TOML scheduler configuration

pub mod calendar;
pub mod config;
pub mod scrum;
