//! Error handling for the CV analyzer
//!
//! The analysis engine itself is infallible; these errors cover the
//! surrounding plumbing (file input, configuration, record persistence and
//! report rendering).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Record version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, CvAnalyzerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CvAnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        CvAnalyzerError::Processing(err.to_string())
    }
}
