//! Generated block handling
//!
//! The crontab is treated as a preserved prefix (everything above the begin
//! marker) followed by a generated suffix that is fully owned by raketab.
//! Rewriting truncates at the marker and appends a freshly rendered block, so
//! running against our own output reproduces the same prefix.

use std::path::Path;

use super::constants::{BEGIN_MARKER_LINE, BEGIN_MARKER_TOKEN, END_MARKER_LINE, LOG_TAG};
use crate::domain::AggregatedTaskMap;

/// Literal lines and tags of the generated block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFormat {
    /// Substring identifying the begin marker line
    pub marker_token: String,
    /// Must contain `marker_token`
    pub begin_line: String,
    pub end_line: String,
    pub log_tag: String,
}

impl Default for BlockFormat {
    fn default() -> Self {
        Self {
            marker_token: BEGIN_MARKER_TOKEN.to_string(),
            begin_line: BEGIN_MARKER_LINE.to_string(),
            end_line: END_MARKER_LINE.to_string(),
            log_tag: LOG_TAG.to_string(),
        }
    }
}

/// Byte offset of the first line containing `token`
///
/// Counts every line (with its terminator) strictly before the marker line.
/// `None` means there is no generated block and the whole text is prefix.
pub fn locate_marker(text: &str, token: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.contains(token) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Everything above the generated block, byte-for-byte
pub fn preserved_prefix<'a>(text: &'a str, format: &BlockFormat) -> &'a str {
    let offset = locate_marker(text, &format.marker_token).unwrap_or(text.len());
    &text[..offset]
}

/// One crontab line for a single task
pub fn render_line(
    schedule: &str,
    runner: &Path,
    project_path: &str,
    task: &str,
    format: &BlockFormat,
) -> String {
    format!(
        "{} {} -C {} {} 2>&1| logger -t {}",
        schedule,
        runner.display(),
        project_path,
        task,
        format.log_tag
    )
}

/// Render the full generated block, markers included
///
/// Projects without tasks contribute nothing; duplicates are kept.
pub fn render_block(tasks: &AggregatedTaskMap, runner: &Path, format: &BlockFormat) -> String {
    let mut block = String::new();
    block.push_str(&format.begin_line);
    block.push('\n');
    for (project_path, task) in tasks.tasks() {
        block.push_str(&render_line(
            &task.schedule,
            runner,
            project_path,
            &task.task,
            format,
        ));
        block.push('\n');
    }
    block.push_str(&format.end_line);
    block.push('\n');
    block
}

/// Join prefix and block
///
/// A prefix whose last line is unterminated gets a newline so the begin
/// marker always starts its own line.
pub fn merge(prefix: &str, block: &str) -> String {
    let mut content = String::with_capacity(prefix.len() + block.len() + 1);
    content.push_str(prefix);
    if !prefix.is_empty() && !prefix.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(block);
    content
}
