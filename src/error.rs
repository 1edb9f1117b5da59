use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for version-stamp operations
#[derive(Error, Debug)]
pub enum StampError {
    #[error("Environment variable '{var}' is not set")]
    MissingVersion { var: String },

    #[error("Environment variable '{var}' does not contain valid UTF-8")]
    InvalidVersionEncoding { var: String },

    #[error("Expected to read {}: {reason}", .path.display())]
    ExpectedContent { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-stamp
pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// Create a missing-version error for the given variable
    pub fn missing_version(var: impl Into<String>) -> Self {
        StampError::MissingVersion { var: var.into() }
    }

    /// Create an expected-content error for a manifest path
    pub fn expected_content(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StampError::ExpectedContent {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        StampError::Config(msg.into())
    }
}
