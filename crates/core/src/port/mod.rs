// Port Layer - Interfaces for external dependencies

pub mod manifest_reader;
pub mod runner_resolver;
pub mod scheduler_table;

// Re-exports
pub use manifest_reader::ManifestReader;
pub use runner_resolver::RunnerResolver;
pub use scheduler_table::SchedulerTable;
