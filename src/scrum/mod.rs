//! Design-task boards and the due-date scheduler.
//!
//! Each project owns a scrum board of design tasks. Tasks carry a planned
//! duration in working days, optional dependencies and an optional assignee.
//! The scheduler ("equalize") recomputes due dates for every open task so
//! that dependencies come first and each assignee works through their tasks
//! one after another. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
