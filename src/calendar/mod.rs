//! Working-day calendar and public holiday data.
//!
//! Due dates produced by the scheduler only count working days: days that are
//! neither a configured weekend day nor a public holiday. Holiday data comes
//! from a remote feed and is cached locally; a failed fetch degrades to the
//! cached set rather than aborting scheduling. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
