//! Health-metrics document loading.
//!
//! The health file is a single JSON object with a `metrics` array. Entries
//! are opaque; only the shape of the document is validated.

use std::path::Path;

use fitness_core::error::{FitnessError, Result};
use fitness_core::models::HealthDocument;
use serde_json::Value;
use tracing::{debug, info};

/// Read and validate the full health document.
pub fn read_health_data(path: &Path) -> Result<HealthDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        debug!("Failed to read health file {}: {}", path.display(), e);
        match e.kind() {
            // Non-UTF-8 content cannot be a JSON document.
            std::io::ErrorKind::InvalidData => FitnessError::MalformedDocument {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
            _ => FitnessError::from_io(path, e),
        }
    })?;

    let value: Value =
        serde_json::from_str(&content).map_err(|e| FitnessError::MalformedDocument {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_document(value)
}

/// Count the entries in the health document's `metrics` array.
pub fn health_metrics_counter(path: &Path) -> Result<usize> {
    let document = read_health_data(path)?;
    let total_entries = document.entry_count();
    info!("Total health entries: {}", total_entries);
    Ok(total_entries)
}

/// Check that `value` is an object whose `metrics` field is an array.
pub fn validate_document(value: Value) -> Result<HealthDocument> {
    let mut object = match value {
        Value::Object(object) => object,
        other => {
            return Err(FitnessError::InvalidSchema(format!(
                "expected an object with a \"metrics\" array, found {}",
                json_type_name(&other)
            )))
        }
    };

    match object.remove("metrics") {
        Some(Value::Array(metrics)) => Ok(HealthDocument {
            metrics,
            extra: object,
        }),
        Some(other) => Err(FitnessError::InvalidSchema(format!(
            "\"metrics\" is {}, expected an array",
            json_type_name(&other)
        ))),
        None => Err(FitnessError::InvalidSchema(
            "missing \"metrics\" field, expected an object with a \"metrics\" array".to_string(),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
