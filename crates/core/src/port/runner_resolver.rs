// Runner Resolver Port
// Resolves the task-runner executable to the absolute path written into each line

use crate::error::Result;
use std::path::PathBuf;

/// Runner resolver trait
pub trait RunnerResolver: Send + Sync {
    /// Resolve `name` to an absolute invocation path
    ///
    /// # Errors
    /// - AppError::RunnerNotFound if `name` is not on the search path
    fn resolve(&self, name: &str) -> Result<PathBuf>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::{Arc, Mutex};

    /// Resolver that knows a fixed path, or nothing at all
    pub struct StaticRunnerResolver {
        path: Option<PathBuf>,
        call_count: Arc<Mutex<usize>>,
    }

    impl StaticRunnerResolver {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self {
                path: Some(path.into()),
                call_count: Arc::new(Mutex::new(0)),
            }
        }

        pub fn not_found() -> Self {
            Self {
                path: None,
                call_count: Arc::new(Mutex::new(0)),
            }
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    impl RunnerResolver for StaticRunnerResolver {
        fn resolve(&self, name: &str) -> Result<PathBuf> {
            *self.call_count.lock().unwrap() += 1;
            self.path
                .clone()
                .ok_or_else(|| AppError::RunnerNotFound(name.to_string()))
        }
    }
}
