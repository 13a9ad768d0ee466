// Central Error Type for the Application

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
///
/// Every variant is fatal for the run: nothing is retried and no generated
/// block is installed once one of these has been raised.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("no crontab exists for this user: {0}")]
    NoExistingTable(String),

    #[error("failed to read current crontab: {0}")]
    TableFetch(String),

    #[error("manifest not found: {path}: {reason}")]
    ConfigNotFound { path: PathBuf, reason: String },

    #[error("malformed manifest {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("couldn't find {0} executable")]
    RunnerNotFound(String),

    #[error("scratch file error: {0}")]
    ScratchIo(String),

    #[error("crontab install failed: {0}")]
    Install(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Build a `ConfigParse` error for the manifest at `path`
    pub fn config_parse(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AppError::ConfigParse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
