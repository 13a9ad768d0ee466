// Scratch file staging for crontab install
// reason: tempfile removes the file on drop, so every exit path cleans up
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use raketab_core::{AppError, Result};

const SCRATCH_PREFIX: &str = "raketab-";

/// Uniquely named, private staging file
///
/// Removed when dropped; call [`ScratchFile::close`] to observe removal
/// failures.
pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    /// Stage `contents` in the system temp directory
    pub fn create(contents: &str) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempfile()
            .map_err(scratch_error)?;
        Self::fill(file, contents)
    }

    /// Stage `contents` inside `dir`
    pub fn create_in(dir: &Path, contents: &str) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempfile_in(dir)
            .map_err(scratch_error)?;
        Self::fill(file, contents)
    }

    fn fill(mut file: NamedTempFile, contents: &str) -> Result<Self> {
        file.write_all(contents.as_bytes()).map_err(scratch_error)?;
        file.flush().map_err(scratch_error)?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Remove the file, reporting failure
    pub fn close(self) -> io::Result<()> {
        self.file.close()
    }
}

fn scratch_error(err: io::Error) -> AppError {
    AppError::ScratchIo(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_stages_contents() {
        let dir = tempfile::tempdir().unwrap();

        let scratch = ScratchFile::create_in(dir.path(), "0 1 * * * echo hi\n").unwrap();

        assert!(scratch
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("raketab-"));
        assert_eq!(
            std::fs::read_to_string(scratch.path()).unwrap(),
            "0 1 * * * echo hi\n"
        );
    }

    #[test]
    fn test_close_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = ScratchFile::create_in(dir.path(), "x\n").unwrap();
        let path = scratch.path().to_path_buf();

        scratch.close().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = {
            let scratch = ScratchFile::create_in(dir.path(), "x\n").unwrap();
            scratch.path().to_path_buf()
        };

        assert!(!path.exists());
    }

    #[test]
    fn test_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let a = ScratchFile::create_in(dir.path(), "a").unwrap();
        let b = ScratchFile::create_in(dir.path(), "b").unwrap();

        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_missing_dir_is_scratch_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = ScratchFile::create_in(&missing, "x");

        assert!(matches!(result, Err(AppError::ScratchIo(_))));
    }
}
