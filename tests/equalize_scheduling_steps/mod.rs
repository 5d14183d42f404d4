//! Step definitions for equalize scheduling scenarios.

pub mod world;

mod given;
mod then;
mod when;
