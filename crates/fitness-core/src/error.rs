use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while building a fitness summary.
#[derive(Error, Debug)]
pub enum FitnessError {
    /// A required configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A data file does not exist at the configured path.
    #[error("Data file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A data file exists but could not be opened or read.
    #[error("Failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The health file is not a valid JSON document.
    #[error("Invalid JSON format in health data file {}: {message}", .path.display())]
    MalformedDocument { path: PathBuf, message: String },

    /// The health document parsed but does not have the expected shape.
    #[error("Invalid JSON format: {0}")]
    InvalidSchema(String),

    /// The CSV reader failed at the structural level.
    #[error("Error processing CSV file {}: {source}", .path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Catch-all for failures outside the data pipeline (e.g. task joins).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FitnessError {
    /// Map an I/O failure on `path`, keeping a missing file distinct.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            FitnessError::FileNotFound(path)
        } else {
            FitnessError::FileRead { path, source }
        }
    }

    /// Short machine-friendly name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FitnessError::Config(_) => "configuration",
            FitnessError::FileNotFound(_) => "file_not_found",
            FitnessError::FileRead { .. } => "file_read",
            FitnessError::MalformedDocument { .. } => "malformed_document",
            FitnessError::InvalidSchema(_) => "invalid_schema",
            FitnessError::ParseFailure { .. } => "parse_failure",
            FitnessError::Other(_) => "other",
        }
    }
}

/// Convenience alias used throughout the fitness crates.
pub type Result<T> = std::result::Result<T, FitnessError>;
