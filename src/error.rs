//! Error types for conversion and export

use thiserror::Error;

/// Errors that can occur while loading graphs or exporting triples
#[derive(Debug, Error)]
pub enum KeenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Link refers to unknown node index {index}")]
    UnknownNode { index: usize },

    #[error("Unknown database: {0}")]
    UnknownDatabase(String),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Failed to move table into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type for biokeen operations
pub type KeenResult<T> = Result<T, KeenError>;
