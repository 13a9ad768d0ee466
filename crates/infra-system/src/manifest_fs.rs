// Filesystem manifest reader
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;

use raketab_core::port::ManifestReader;
use raketab_core::{AppError, Result};

/// Reads manifests straight from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManifestReader;

#[async_trait]
impl ManifestReader for FsManifestReader {
    async fn read(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => AppError::config_parse(path, "file is not valid UTF-8"),
            _ => AppError::ConfigNotFound {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })
    }
}
