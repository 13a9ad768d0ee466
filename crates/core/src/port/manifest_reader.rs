// Manifest Reader Port
// File reads are the aggregator's only side effect

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Manifest reader trait
#[async_trait]
pub trait ManifestReader: Send + Sync {
    /// Read the manifest at `path` as text
    ///
    /// # Errors
    /// - AppError::ConfigNotFound if the file is missing or unreadable
    async fn read(&self, path: &Path) -> Result<String>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// In-memory manifest files keyed by absolute path
    #[derive(Default)]
    pub struct InMemoryManifestReader {
        files: HashMap<PathBuf, String>,
        reads: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl InMemoryManifestReader {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
            self.files.insert(path.into(), content.into());
            self
        }

        /// Paths read so far, in order
        pub fn reads(&self) -> Vec<PathBuf> {
            self.reads.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ManifestReader for InMemoryManifestReader {
        async fn read(&self, path: &Path) -> Result<String> {
            self.reads.lock().unwrap().push(path.to_path_buf());
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| AppError::ConfigNotFound {
                    path: path.to_path_buf(),
                    reason: "no such file".to_string(),
                })
        }
    }
}
