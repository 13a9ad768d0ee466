// Crontab adapter
// reason: tokio process so the adapter fits the async SchedulerTable port
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

use raketab_core::port::SchedulerTable;
use raketab_core::{AppError, Result};

use crate::scratch::ScratchFile;

const DEFAULT_PROGRAM: &str = "crontab";

/// `SchedulerTable` backed by the `crontab` command
///
/// - fetch: `crontab -l`
/// - install: stage to a scratch file, then `crontab <file>`
pub struct CrontabCli {
    program: PathBuf,
    scratch_dir: Option<PathBuf>,
}

impl CrontabCli {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            scratch_dir: None,
        }
    }

    /// Use a different `crontab`-compatible program
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Stage scratch files in `dir` instead of the system temp directory
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    fn stage(&self, content: &str) -> Result<ScratchFile> {
        match &self.scratch_dir {
            Some(dir) => ScratchFile::create_in(dir, content),
            None => ScratchFile::create(content),
        }
    }

    async fn run_install(&self, staged: &Path) -> Result<()> {
        let output = Command::new(&self.program)
            .arg(staged)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                AppError::Install(format!("failed to run {}: {}", self.program.display(), e))
            })?;

        if !output.status.success() {
            return Err(AppError::Install(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}

impl Default for CrontabCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchedulerTable for CrontabCli {
    async fn fetch(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("-l")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                AppError::TableFetch(format!("failed to run {}: {}", self.program.display(), e))
            })?;

        // crontab -l fails when the user has no table
        if !output.status.success() {
            return Err(AppError::NoExistingTable(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let table = String::from_utf8(output.stdout)
            .map_err(|e| AppError::TableFetch(format!("crontab is not valid UTF-8: {}", e)))?;

        debug!(bytes = table.len(), "Fetched crontab");
        Ok(table)
    }

    async fn install(&self, content: &str) -> Result<()> {
        let scratch = self.stage(content)?;
        debug!(path = %scratch.path().display(), "Staged new crontab");

        let result = self.run_install(scratch.path()).await;

        let staged_path = scratch.path().to_path_buf();
        if let Err(e) = scratch.close() {
            warn!(
                path = %staged_path.display(),
                error = %e,
                "Failed to remove scratch file"
            );
        }

        if result.is_ok() {
            info!(bytes = content.len(), "crontab replaced");
        }
        result
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Fake `crontab` storing its table in `<dir>/table`
    fn fake_crontab(dir: &TempDir) -> PathBuf {
        let script = dir.path().join("crontab");
        let table = dir.path().join("table");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\n\
                 if [ \"$1\" = \"-l\" ]; then\n\
                 \x20 if [ -f '{table}' ]; then cat '{table}'; exit 0; fi\n\
                 \x20 echo 'no crontab for tester' >&2; exit 1\n\
                 fi\n\
                 if grep -q REJECT \"$1\"; then echo 'bad minute' >&2; exit 1; fi\n\
                 cp \"$1\" '{table}'\n",
                table = table.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn cli(dir: &TempDir, scratch: &TempDir) -> CrontabCli {
        CrontabCli::new()
            .with_program(fake_crontab(dir))
            .with_scratch_dir(scratch.path())
    }

    fn scratch_entries(scratch: &TempDir) -> usize {
        fs::read_dir(scratch.path()).unwrap().count()
    }

    #[tokio::test]
    async fn test_fetch_without_table() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();

        let result = cli(&dir, &scratch).fetch().await;

        match result {
            Err(AppError::NoExistingTable(msg)) => assert!(msg.contains("no crontab")),
            other => panic!("expected NoExistingTable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_install_then_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let crontab = cli(&dir, &scratch);

        crontab.install("0 1 * * * echo hi\n").await.unwrap();

        assert_eq!(crontab.fetch().await.unwrap(), "0 1 * * * echo hi\n");
        assert_eq!(scratch_entries(&scratch), 0);
    }

    #[tokio::test]
    async fn test_rejected_install_cleans_scratch() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let crontab = cli(&dir, &scratch);
        crontab.install("0 1 * * * echo hi\n").await.unwrap();

        let result = crontab.install("REJECT\n").await;

        match result {
            Err(AppError::Install(msg)) => assert!(msg.contains("bad minute")),
            other => panic!("expected Install error, got {:?}", other),
        }
        assert_eq!(crontab.fetch().await.unwrap(), "0 1 * * * echo hi\n");
        assert_eq!(scratch_entries(&scratch), 0);
    }

    #[tokio::test]
    async fn test_missing_program() {
        let scratch = tempfile::tempdir().unwrap();
        let crontab = CrontabCli::new()
            .with_program("/nonexistent/crontab")
            .with_scratch_dir(scratch.path());

        assert!(matches!(crontab.fetch().await, Err(AppError::TableFetch(_))));
        assert!(matches!(
            crontab.install("x\n").await,
            Err(AppError::Install(_))
        ));
        assert_eq!(scratch_entries(&scratch), 0);
    }
}
