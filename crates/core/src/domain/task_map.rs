// Aggregated task map (project path -> task set)

use super::task::{ProjectTaskSet, ScheduledTask};

/// Mapping from project path to its declared tasks
///
/// Iterates in insertion order so the rendered block is byte-for-byte
/// reproducible from the same manifests. Re-inserting a path replaces its
/// task set but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedTaskMap {
    entries: Vec<(String, ProjectTaskSet)>,
}

impl AggregatedTaskMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the task set for `path`
    ///
    /// Returns the previous task set if `path` was already present.
    pub fn insert(&mut self, path: impl Into<String>, tasks: ProjectTaskSet) -> Option<ProjectTaskSet> {
        let path = path.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == path) {
            Some((_, slot)) => Some(std::mem::replace(slot, tasks)),
            None => {
                self.entries.push((path, tasks));
                None
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&ProjectTaskSet> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == path)
            .map(|(_, tasks)| tasks)
    }

    /// Projects in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProjectTaskSet)> {
        self.entries.iter().map(|(path, tasks)| (path.as_str(), tasks))
    }

    /// Every (project path, task) pair in render order
    pub fn tasks(&self) -> impl Iterator<Item = (&str, &ScheduledTask)> {
        self.iter()
            .flat_map(|(path, tasks)| tasks.iter().map(move |task| (path, task)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn task_count(&self) -> usize {
        self.entries.iter().map(|(_, tasks)| tasks.len()).sum()
    }
}
