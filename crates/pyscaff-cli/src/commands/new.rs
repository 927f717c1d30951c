//! Implementation of the `pyscaff new` command.
//!
//! Responsibility: resolve name, base directory and date from arguments and
//! config, call the core scaffold service, and display results. No business
//! logic lives here.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument};

use pyscaff_adapters::{LocalFilesystem, SimpleRenderer, builtin_blueprint};
use pyscaff_core::{
    application::{ScaffoldRequest, ScaffoldService},
    domain::{DEFAULT_PROJECT_NAME, FsEntry, ProjectName, ProjectStructure},
    error::ScaffoldError,
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
};

/// Execute the `pyscaff new` command.
///
/// Dispatch sequence:
/// 1. Resolve the project name (argument, prompt, or default)
/// 2. Resolve base directory and changelog date
/// 3. Early-exit with a listing if `--dry-run`
/// 4. Scaffold via `ScaffoldService`
/// 5. Print the completion line
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let default_name = config
        .defaults
        .project_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_PROJECT_NAME);

    // 1. Resolve name
    let project_name = match args.name {
        Some(name) => resolve_name(&name, default_name),
        None => prompt::project_name(default_name)?,
    };

    // 2. Resolve base dir + date
    let base_dir = resolve_base_dir(args.path, &config);
    let date = args.date.unwrap_or_else(today);

    let request = ScaffoldRequest::new(project_name, base_dir, date);
    debug!(
        project = %request.project_name,
        root = %request.root().display(),
        %date,
        "Request resolved"
    );

    let blueprint = builtin_blueprint::python_project().map_err(ScaffoldError::from)?;
    let service = ScaffoldService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&blueprint, &request)?;
        if service.root_exists(&request) {
            output.warning(&format!(
                "{} already exists; files would be overwritten",
                request.root().display()
            ))?;
        }
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            request.project_name,
            request.root().display(),
        ))?;
        for line in plan_lines(&plan) {
            output.print(&line)?;
        }
        return Ok(());
    }

    // 4. Scaffold
    info!(project = %request.project_name, "Scaffold started");
    service.scaffold(&blueprint, &request)?;

    // 5. Completion line
    output.print(&success_message(&request.project_name))?;
    Ok(())
}

/// The line printed after a successful run.
pub fn success_message(name: &ProjectName) -> String {
    format!("Project structure for '{name}' created successfully!")
}

/// An explicitly empty argument behaves like an empty prompt answer.
fn resolve_name(arg: &str, default: &str) -> ProjectName {
    if arg.is_empty() {
        ProjectName::new(default)
    } else {
        ProjectName::new(arg)
    }
}

fn resolve_base_dir(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.defaults.base_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Indented dry-run listing, one line per entry.
fn plan_lines(plan: &ProjectStructure) -> Vec<String> {
    plan.entries()
        .iter()
        .map(|entry| match entry {
            FsEntry::Directory(dir) => format!("  {}/", dir.path.display()),
            FsEntry::File(file) if file.permissions.executable_flag() => {
                format!("  {} (executable)", file.path.display())
            }
            FsEntry::File(file) => format!("  {}", file.path.display()),
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
