//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and coordinate with ports.

pub mod completion;
pub mod language;
pub mod run_interview;
