// Scheduled task domain model

use serde::Deserialize;

use super::error::{DomainError, Result};

/// One (schedule, task) pair declared by a project
///
/// Identity is structural; duplicate pairs are kept and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduledTask {
    /// Task identifier handed to the runner
    pub task: String,
    /// Schedule expression in the scheduler's native syntax (not validated)
    pub schedule: String,
}

impl ScheduledTask {
    pub fn new(task: impl Into<String>, schedule: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            schedule: schedule.into(),
        }
    }

    /// Each task must render to exactly one crontab line
    pub fn validate(&self) -> Result<()> {
        require_single_line("task", &self.task)?;
        require_single_line("schedule", &self.schedule)
    }
}

/// Ordered sequence of tasks declared by one project
pub type ProjectTaskSet = Vec<ScheduledTask>;

/// Entry of the root manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectReference {
    /// Project directory, relative to the home directory
    pub path: String,
    /// Display label (informational only)
    #[serde(default)]
    pub label: Option<String>,
}

impl ProjectReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(DomainError::EmptyProjectPath);
        }
        require_single_line("path", &self.path)
    }
}

fn require_single_line(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    if value.contains(['\n', '\r']) {
        return Err(DomainError::MultilineField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
