//! Error types for the quote runner.

use std::path::PathBuf;

use mosaic_core::CoreError;

/// Quote runner errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Cannot read job file {path}: {source}")]
    ReadJob {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid job file: {0}")]
    InvalidJob(#[source] serde_json::Error),

    #[error("Cannot render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Estimate failed: {0}")]
    Estimate(#[from] CoreError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
