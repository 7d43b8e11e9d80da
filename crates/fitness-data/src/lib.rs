//! Data ingestion layer for the fitness summary.
//!
//! Reads the workout CSV and the health-metrics JSON document and reduces
//! each to the aggregate the report needs.

pub mod health;
pub mod workout;

pub use fitness_core as core;
