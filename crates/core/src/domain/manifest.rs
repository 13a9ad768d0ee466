// Manifest documents (YAML)
//
// Root manifest (~/.raketabs.yml):
//   dirs:
//     - path: code/shop
//       label: Shop
//
// Project manifest (~/<path>/.raketab.yml):
//   tasks:
//     - task: deploy
//       schedule: "0 2 * * *"

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::error::DomainError;
use super::task::{ProjectReference, ProjectTaskSet};

/// File name of the root manifest, relative to the home directory
pub const ROOT_MANIFEST_FILE: &str = ".raketabs.yml";

/// File name of a project manifest, relative to the project directory
pub const PROJECT_MANIFEST_FILE: &str = ".raketab.yml";

/// Reasons a manifest document can be rejected
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Top-level manifest enumerating participating projects
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RootManifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dirs: Vec<ProjectReference>,
}

impl RootManifest {
    pub fn parse(source: &str) -> Result<Self, ManifestError> {
        let manifest: Self = parse_document(source)?;
        for dir in &manifest.dirs {
            dir.validate()?;
        }
        Ok(manifest)
    }
}

/// Per-project manifest listing its scheduled tasks
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectManifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: ProjectTaskSet,
}

impl ProjectManifest {
    pub fn parse(source: &str) -> Result<Self, ManifestError> {
        let manifest: Self = parse_document(source)?;
        for task in &manifest.tasks {
            task.validate()?;
        }
        Ok(manifest)
    }
}

// An empty document declares nothing.
fn parse_document<T: DeserializeOwned + Default>(source: &str) -> Result<T, ManifestError> {
    if source.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_yaml::from_str(source)?)
}

// `tasks:` with no entries parses as null.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
