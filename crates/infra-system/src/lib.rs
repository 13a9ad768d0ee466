// Raketab Infrastructure - System Adapters
// Implements: SchedulerTable, RunnerResolver, ManifestReader

pub mod crontab;
pub mod manifest_fs;
pub mod runner;
pub mod scratch;

pub use crontab::CrontabCli;
pub use manifest_fs::FsManifestReader;
pub use runner::PathRunnerResolver;
pub use scratch::ScratchFile;
