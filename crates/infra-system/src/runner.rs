// Task runner lookup
// reason: which mirrors the shell's PATH search
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

use raketab_core::port::RunnerResolver;
use raketab_core::{AppError, Result};

/// Resolves runners on `PATH`, or on an explicit search path
#[derive(Debug, Clone, Default)]
pub struct PathRunnerResolver {
    search_path: Option<OsString>,
}

impl PathRunnerResolver {
    /// Search the process `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `paths` (PATH syntax) instead of the process `PATH`
    pub fn with_search_path(paths: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(paths.into()),
        }
    }
}

impl RunnerResolver for PathRunnerResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));

        let found = match &self.search_path {
            Some(paths) => which::which_in(name, Some(paths), &cwd),
            None => which::which(name),
        }
        .map_err(|e| {
            debug!(runner = %name, error = %e, "Runner lookup failed");
            AppError::RunnerNotFound(name.to_string())
        })?;

        // Cron runs from the home directory, so relative PATH entries won't do.
        Ok(if found.is_absolute() {
            found
        } else {
            cwd.join(found)
        })
    }
}
