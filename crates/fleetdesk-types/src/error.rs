//! Error types for fleetdesk

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// CSV import failures, surfaced at the pipeline boundary.
///
/// User-facing messages stay generic; structured fields exist for logs
/// and tests only.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Header only, or nothing at all: there is no data row to import.
    #[error("CSV file has an invalid format")]
    EmptyInput,

    /// A required header is absent from the header row.
    #[error("CSV file format not recognized")]
    UnknownFormat { missing: String },

    /// Anything that went wrong while mapping rows to records.
    #[error("CSV import failed, check the file and retry")]
    Import(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("CSV export error: {0}")]
    Export(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;
