//! Raketab CLI - merges per-project rake schedules into the user's crontab

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing::info;

use raketab_core::application::constants::DEFAULT_RUNNER;
use raketab_core::application::{ConfigAggregator, RunContext, TableRewriter};
use raketab_core::domain::AggregatedTaskMap;
use raketab_infra_system::{CrontabCli, FsManifestReader, PathRunnerResolver};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "raketab")]
#[command(about = "Regenerate the raketab block of your crontab", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root manifest [default: ~/.raketabs.yml]
    #[arg(long, env = "RAKETAB_CONFIG", global = true)]
    config: Option<String>,

    /// Directory project paths are resolved against [default: your home]
    #[arg(long, env = "RAKETAB_HOME", global = true)]
    home: Option<PathBuf>,

    /// Task runner looked up on PATH
    #[arg(long, env = "RAKETAB_RUNNER", default_value = DEFAULT_RUNNER, global = true)]
    runner: String,
}

#[derive(Subcommand, Clone, Copy, Default)]
enum Commands {
    /// Rewrite the generated block and install the crontab (default)
    #[default]
    Sync,

    /// Print the crontab that sync would install, without installing it
    Preview,

    /// List the tasks declared by every project
    List,
}

#[derive(Tabled)]
struct TaskRow {
    project: String,
    schedule: String,
    task: String,
}

fn build_context(cli: &Cli) -> Result<RunContext> {
    let home = match &cli.home {
        Some(home) => home.clone(),
        None => directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .context("Could not determine home directory")?,
    };

    let mut context = RunContext::new(home).with_runner(cli.runner.clone());
    if let Some(config) = &cli.config {
        context = context.with_root_manifest(shellexpand::tilde(config).into_owned());
    }

    Ok(context)
}

fn task_rows(tasks: &AggregatedTaskMap) -> Vec<TaskRow> {
    tasks
        .tasks()
        .map(|(project, task)| TaskRow {
            project: project.to_string(),
            schedule: task.schedule.clone(),
            task: task.task.clone(),
        })
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    info!("raketab v{} starting", VERSION);

    let context = build_context(&cli)?;
    info!(
        home = %context.home.display(),
        root_manifest = %context.root_manifest.display(),
        runner = %context.runner,
        "Resolved run context"
    );

    let aggregator = ConfigAggregator::new(Arc::new(FsManifestReader));
    let tasks = aggregator
        .aggregate(&context)
        .await
        .context("Failed to load manifests")?;

    let rewriter = TableRewriter::new(
        Arc::new(CrontabCli::new()),
        Arc::new(PathRunnerResolver::new()),
        &context,
    );

    match cli.command.unwrap_or_default() {
        Commands::Sync => {
            let plan = rewriter
                .rewrite(&tasks)
                .await
                .context("Failed to update crontab")?;

            let summary = format!(
                "✓ crontab updated: {} task(s) from {} project(s)",
                plan.rendered_tasks,
                tasks.len()
            );
            println!("{}", summary.green().bold());
            if plan.is_unchanged() {
                println!("{}", "  (no changes)".yellow());
            }
        }

        Commands::Preview => {
            let plan = rewriter
                .plan(&tasks)
                .await
                .context("Failed to render crontab")?;
            print!("{}", plan.content);
        }

        Commands::List => {
            let rows = task_rows(&tasks);
            if rows.is_empty() {
                println!("{}", "No tasks declared".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }
    }

    Ok(())
}
