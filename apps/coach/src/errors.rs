use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
/// Collaborator failures are not represented here: they stay as `LlmError`
/// and are handled by falling back to the heuristic pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Configuration errors are fatal and reported without a backtrace.
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}
