//! Configuration Aggregator
//!
//! Loads the root manifest, then every project manifest it lists, into an
//! `AggregatedTaskMap`. Aggregation is all-or-nothing: the first missing or
//! malformed manifest aborts the run.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::context::RunContext;
use crate::domain::{AggregatedTaskMap, ManifestError, ProjectManifest, RootManifest};
use crate::error::{AppError, Result};
use crate::port::ManifestReader;

pub struct ConfigAggregator {
    reader: Arc<dyn ManifestReader>,
}

impl ConfigAggregator {
    pub fn new(reader: Arc<dyn ManifestReader>) -> Self {
        Self { reader }
    }

    /// Build the task map for every project in the root manifest
    ///
    /// # Errors
    /// - AppError::ConfigNotFound if any manifest cannot be read
    /// - AppError::ConfigParse if any manifest is malformed
    pub async fn aggregate(&self, context: &RunContext) -> Result<AggregatedTaskMap> {
        let root = self.load_root(context).await?;
        let mut tasks = AggregatedTaskMap::new();

        for dir in root.dirs {
            let manifest_path = context.project_manifest_path(&dir.path);
            let manifest = self.load_project(&manifest_path).await?;

            debug!(
                project = %dir.path,
                label = ?dir.label,
                tasks = manifest.tasks.len(),
                "Loaded project manifest"
            );

            if tasks.insert(dir.path.clone(), manifest.tasks).is_some() {
                warn!(project = %dir.path, "Project listed twice, keeping last declaration");
            }
        }

        info!(
            projects = tasks.len(),
            tasks = tasks.task_count(),
            "Aggregated project manifests"
        );

        Ok(tasks)
    }

    /// Load and validate the root manifest
    pub async fn load_root(&self, context: &RunContext) -> Result<RootManifest> {
        let source = self.reader.read(&context.root_manifest).await?;
        RootManifest::parse(&source).map_err(|e| parse_error(&context.root_manifest, e))
    }

    async fn load_project(&self, path: &Path) -> Result<ProjectManifest> {
        let source = self.reader.read(path).await?;
        ProjectManifest::parse(&source).map_err(|e| parse_error(path, e))
    }
}

fn parse_error(path: &Path, err: ManifestError) -> AppError {
    AppError::config_parse(path, err)
}
