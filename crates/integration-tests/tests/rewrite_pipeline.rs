//! End-to-end rewrite pipeline over real manifest files
//!
//! Manifests live in a temporary home directory; the crontab and runner are
//! in-memory fakes so nothing touches the real scheduler.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use raketab_core::application::{ConfigAggregator, RunContext, TableRewriter};
use raketab_core::port::runner_resolver::mocks::StaticRunnerResolver;
use raketab_core::port::scheduler_table::mocks::InMemorySchedulerTable;
use raketab_core::AppError;
use raketab_infra_system::FsManifestReader;
use tempfile::TempDir;

const BEGIN: &str = "# BEGIN RAKETABS GENERATED TASKS - DO NOT EDIT MANUALLY\n";
const END: &str = "# END RAKETABS GENERATED TASKS\n";
const RUNNER: &str = "/path/to/runner";

fn write(home: &Path, relative: &str, content: &str) {
    let path = home.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn home_with_project_a() -> TempDir {
    let home = tempfile::tempdir().unwrap();
    write(home.path(), ".raketabs.yml", "dirs:\n  - path: proj/a\n    label: A\n");
    write(
        home.path(),
        "proj/a/.raketab.yml",
        "tasks:\n  - task: deploy\n    schedule: \"0 2 * * *\"\n",
    );
    home
}

async fn run(home: &Path, table: Arc<InMemorySchedulerTable>) -> Result<String, AppError> {
    let context = RunContext::new(home);
    let tasks = ConfigAggregator::new(Arc::new(FsManifestReader))
        .aggregate(&context)
        .await?;
    let rewriter = TableRewriter::new(
        table,
        Arc::new(StaticRunnerResolver::new(RUNNER)),
        &context,
    );
    Ok(rewriter.rewrite(&tasks).await?.content)
}

/// Single project appended below an unmarked table
#[tokio::test]
async fn test_fresh_block_appended() {
    let home = home_with_project_a();
    let table = Arc::new(InMemorySchedulerTable::new("0 1 * * * echo hi\n"));

    run(home.path(), table.clone()).await.unwrap();

    let expected = format!(
        "0 1 * * * echo hi\n{}0 2 * * * /path/to/runner -C proj/a deploy 2>&1| logger -t RAKETAB\n{}",
        BEGIN, END
    );
    assert_eq!(table.content(), Some(expected));
}

/// Adding a project grows the block, prefix untouched
#[tokio::test]
async fn test_new_project_extends_block() {
    let home = home_with_project_a();
    let table = Arc::new(InMemorySchedulerTable::new("MAILTO=dev\n0 1 * * * echo hi\n"));
    run(home.path(), table.clone()).await.unwrap();

    write(
        home.path(),
        ".raketabs.yml",
        "dirs:\n  - path: proj/a\n  - path: proj/b\n",
    );
    write(
        home.path(),
        "proj/b/.raketab.yml",
        "tasks:\n  - task: test\n    schedule: \"*/10 * * * *\"\n",
    );
    run(home.path(), table.clone()).await.unwrap();

    let expected = format!(
        "MAILTO=dev\n0 1 * * * echo hi\n{}\
         0 2 * * * /path/to/runner -C proj/a deploy 2>&1| logger -t RAKETAB\n\
         */10 * * * * /path/to/runner -C proj/b test 2>&1| logger -t RAKETAB\n{}",
        BEGIN, END
    );
    assert_eq!(table.content(), Some(expected));
}

/// Repeated runs produce byte-identical tables
#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let home = home_with_project_a();
    write(home.path(), ".raketabs.yml", "dirs:\n  - path: proj/a\n  - path: proj/empty\n");
    write(home.path(), "proj/empty/.raketab.yml", "tasks:\n");
    let table = Arc::new(InMemorySchedulerTable::new("# my jobs\n@reboot start-thing\n"));

    let first = run(home.path(), table.clone()).await.unwrap();
    let second = run(home.path(), table.clone()).await.unwrap();
    let third = run(home.path(), table.clone()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(table.installs(), vec![first.clone(), first.clone(), first]);
}

/// A broken project manifest aborts before the table is touched
#[tokio::test]
async fn test_config_failure_leaves_table_untouched() {
    let home = home_with_project_a();
    write(home.path(), ".raketabs.yml", "dirs:\n  - path: proj/a\n  - path: proj/gone\n");
    let table = Arc::new(InMemorySchedulerTable::new("0 1 * * * echo hi\n"));

    let result = run(home.path(), table.clone()).await;

    assert!(matches!(result, Err(AppError::ConfigNotFound { .. })));
    assert_eq!(table.install_count(), 0);
    assert_eq!(table.content(), Some("0 1 * * * echo hi\n".to_string()));
}

#[tokio::test]
async fn test_missing_root_manifest() {
    let home = tempfile::tempdir().unwrap();
    let table = Arc::new(InMemorySchedulerTable::new(""));

    let result = run(home.path(), table.clone()).await;

    assert!(matches!(result, Err(AppError::ConfigNotFound { .. })));
    assert_eq!(table.install_count(), 0);
}

#[tokio::test]
async fn test_runner_missing_leaves_table_untouched() {
    let home = home_with_project_a();
    let context = RunContext::new(home.path());
    let tasks = ConfigAggregator::new(Arc::new(FsManifestReader))
        .aggregate(&context)
        .await
        .unwrap();
    let table = Arc::new(InMemorySchedulerTable::new("0 1 * * * echo hi\n"));
    let rewriter = TableRewriter::new(
        table.clone(),
        Arc::new(StaticRunnerResolver::not_found()),
        &context,
    );

    let result = rewriter.rewrite(&tasks).await;

    assert!(matches!(result, Err(AppError::RunnerNotFound(_))));
    assert_eq!(table.content(), Some("0 1 * * * echo hi\n".to_string()));
}

#[tokio::test]
async fn test_no_existing_table_is_refused() {
    let home = home_with_project_a();
    let table = Arc::new(InMemorySchedulerTable::missing());

    let result = run(home.path(), table.clone()).await;

    assert!(matches!(result, Err(AppError::NoExistingTable(_))));
    assert_eq!(table.content(), None);
}
