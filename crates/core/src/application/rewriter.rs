//! Table Merge-Rewriter
//!
//! Replaces the generated block in the live crontab while preserving every
//! manually authored line above it. The runner is resolved before the table
//! is even fetched, so a failed lookup can never leave a half-written table.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use super::block::{locate_marker, merge, render_block, BlockFormat};
use super::context::RunContext;
use crate::domain::AggregatedTaskMap;
use crate::error::Result;
use crate::port::{RunnerResolver, SchedulerTable};

/// Computed replacement for the crontab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewritePlan {
    /// Table text as fetched
    pub previous: String,
    /// Table text to install
    pub content: String,
    /// Length of the preserved prefix within `previous`
    pub prefix_len: usize,
    /// Whether `previous` already had a generated block
    pub marker_found: bool,
    pub runner_path: PathBuf,
    /// Task lines in the generated block
    pub rendered_tasks: usize,
}

impl RewritePlan {
    pub fn preserved_prefix(&self) -> &str {
        &self.previous[..self.prefix_len]
    }

    pub fn is_unchanged(&self) -> bool {
        self.previous == self.content
    }
}

pub struct TableRewriter {
    table: Arc<dyn SchedulerTable>,
    resolver: Arc<dyn RunnerResolver>,
    runner: String,
    format: BlockFormat,
}

impl TableRewriter {
    pub fn new(
        table: Arc<dyn SchedulerTable>,
        resolver: Arc<dyn RunnerResolver>,
        context: &RunContext,
    ) -> Self {
        Self {
            table,
            resolver,
            runner: context.runner.clone(),
            format: context.block.clone(),
        }
    }

    /// Compute the new table without installing it
    ///
    /// # Errors
    /// - AppError::RunnerNotFound before the table is touched
    /// - AppError::NoExistingTable / AppError::TableFetch from the fetch
    pub async fn plan(&self, tasks: &AggregatedTaskMap) -> Result<RewritePlan> {
        let runner_path = self.resolver.resolve(&self.runner)?;
        debug!(runner = %self.runner, path = %runner_path.display(), "Resolved task runner");

        let previous = self.table.fetch().await?;

        let marker = locate_marker(&previous, &self.format.marker_token);
        let prefix_len = marker.unwrap_or(previous.len());
        debug!(
            prefix_len,
            marker_found = marker.is_some(),
            table_len = previous.len(),
            "Located generated block"
        );

        let block = render_block(tasks, &runner_path, &self.format);
        let content = merge(&previous[..prefix_len], &block);

        Ok(RewritePlan {
            prefix_len,
            marker_found: marker.is_some(),
            runner_path,
            rendered_tasks: tasks.task_count(),
            content,
            previous,
        })
    }

    /// Compute the new table and install it
    ///
    /// # Errors
    /// Everything `plan` raises, plus AppError::ScratchIo / AppError::Install
    /// from the install itself. Nothing is installed unless planning
    /// succeeded.
    pub async fn rewrite(&self, tasks: &AggregatedTaskMap) -> Result<RewritePlan> {
        let plan = self.plan(tasks).await?;

        self.table.install(&plan.content).await?;

        info!(
            tasks = plan.rendered_tasks,
            replaced_block = plan.marker_found,
            unchanged = plan.is_unchanged(),
            "Installed crontab"
        );

        Ok(plan)
    }
}
