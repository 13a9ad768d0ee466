//! Run context
//!
//! Everything a run needs to know about its environment, resolved once by the
//! caller and passed in explicitly. Core code never looks at the process
//! working directory or the `HOME` variable itself.

use std::path::{Path, PathBuf};

use super::block::BlockFormat;
use super::constants::DEFAULT_RUNNER;
use crate::domain::{PROJECT_MANIFEST_FILE, ROOT_MANIFEST_FILE};

#[derive(Debug, Clone)]
pub struct RunContext {
    /// Home directory; project paths are resolved against it
    pub home: PathBuf,
    /// Location of the root manifest
    pub root_manifest: PathBuf,
    /// Task runner name, resolved to an absolute path before rendering
    pub runner: String,
    pub block: BlockFormat,
}

impl RunContext {
    /// Context with the conventional layout under `home`
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            root_manifest: home.join(ROOT_MANIFEST_FILE),
            home,
            runner: DEFAULT_RUNNER.to_string(),
            block: BlockFormat::default(),
        }
    }

    pub fn with_root_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_manifest = path.into();
        self
    }

    pub fn with_runner(mut self, runner: impl Into<String>) -> Self {
        self.runner = runner.into();
        self
    }

    /// `<home>/<project_path>/.raketab.yml`
    ///
    /// An absolute `project_path` is used as-is.
    pub fn project_manifest_path(&self, project_path: &str) -> PathBuf {
        self.home.join(project_path).join(PROJECT_MANIFEST_FILE)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}
