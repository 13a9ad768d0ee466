// Domain Layer - Pure business logic and entities

pub mod error;
pub mod manifest;
pub mod task;
pub mod task_map;

// Re-exports
pub use error::DomainError;
pub use manifest::{
    ManifestError, ProjectManifest, RootManifest, PROJECT_MANIFEST_FILE, ROOT_MANIFEST_FILE,
};
pub use task::{ProjectReference, ProjectTaskSet, ScheduledTask};
pub use task_map::AggregatedTaskMap;
