// Error types for route-compare

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    /// A snapshot could not be decoded into a route-information document.
    /// `input` names the snapshot (usually its file path).
    #[error("Malformed route document {input}: {reason}")]
    MalformedInput { input: String, reason: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn malformed(input: impl Into<String>, reason: impl ToString) -> Self {
        AppError::MalformedInput {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Convert error to user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AppError::MalformedInput { input, .. } => {
                format!(
                    "Could not decode {} as 'show route | display xml' output. No comparison was made.",
                    input
                )
            }
            AppError::Io { path, .. } => {
                format!(
                    "Could not read {}. Check the path and file permissions.",
                    path.display()
                )
            }
            AppError::Config(_) => {
                "Configuration error. Check your config file or command-line arguments.".to_string()
            }
            AppError::Task(_) => {
                "An internal task failed while reading the snapshots. Please try again.".to_string()
            }
            AppError::Serialization(_) => {
                "Data format error. This might be a bug, please report it.".to_string()
            }
        }
    }
}
