//! Runtime layer for the fitness summary.
//!
//! Runs both data readers for a validated configuration and assembles the
//! summary that the binary prints.

pub mod orchestrator;
pub mod report;

pub use fitness_core as core;
pub use fitness_data as data;
