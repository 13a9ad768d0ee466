// Scheduler Table Port
// Abstraction over the user's crontab (fetch as opaque text, replace wholesale)

use crate::error::Result;
use async_trait::async_trait;

/// Scheduler table trait
///
/// Implementations:
/// - CrontabCli: shells out to `crontab -l` / `crontab <file>`
/// - mocks::InMemorySchedulerTable: in-memory table for tests
#[async_trait]
pub trait SchedulerTable: Send + Sync {
    /// Fetch the current table text
    ///
    /// # Errors
    /// - AppError::NoExistingTable if the user has no table at all
    /// - AppError::TableFetch if the table cannot be read
    async fn fetch(&self) -> Result<String>;

    /// Replace the whole table with `content`
    ///
    /// Atomicity is whatever the underlying scheduler provides.
    ///
    /// # Errors
    /// - AppError::ScratchIo if staging the new content fails
    /// - AppError::Install if the scheduler rejects the content
    async fn install(&self, content: &str) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::{Arc, Mutex};

    /// In-memory scheduler table
    ///
    /// `None` content behaves like a user without a crontab.
    pub struct InMemorySchedulerTable {
        content: Arc<Mutex<Option<String>>>,
        installs: Arc<Mutex<Vec<String>>>,
        fail_install: Option<String>,
    }

    impl InMemorySchedulerTable {
        pub fn new(content: impl Into<String>) -> Self {
            Self {
                content: Arc::new(Mutex::new(Some(content.into()))),
                installs: Arc::new(Mutex::new(Vec::new())),
                fail_install: None,
            }
        }

        pub fn missing() -> Self {
            Self {
                content: Arc::new(Mutex::new(None)),
                installs: Arc::new(Mutex::new(Vec::new())),
                fail_install: None,
            }
        }

        /// Reject every install with `message`, leaving the table untouched
        pub fn failing_install(mut self, message: impl Into<String>) -> Self {
            self.fail_install = Some(message.into());
            self
        }

        pub fn content(&self) -> Option<String> {
            self.content.lock().unwrap().clone()
        }

        pub fn install_count(&self) -> usize {
            self.installs.lock().unwrap().len()
        }

        pub fn installs(&self) -> Vec<String> {
            self.installs.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SchedulerTable for InMemorySchedulerTable {
        async fn fetch(&self) -> Result<String> {
            self.content
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| AppError::NoExistingTable("no crontab for mock user".to_string()))
        }

        async fn install(&self, content: &str) -> Result<()> {
            if let Some(message) = &self.fail_install {
                return Err(AppError::Install(message.clone()));
            }
            self.installs.lock().unwrap().push(content.to_string());
            *self.content.lock().unwrap() = Some(content.to_string());
            Ok(())
        }
    }
}
