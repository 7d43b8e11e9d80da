//! Shared types for the fitness summary tools.
//!
//! Holds the error type, the workout and health data model, the validated
//! run configuration and the text used in the printed report.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{FitnessError, Result};
