//! Implementation of the `strata new` command.
//!
//! Responsibility: collect the module name and target directory, call the
//! core architecture service, and display results. No business logic lives
//! here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use strata_adapters::LocalFilesystem;
use strata_core::{
    application::{ArchitectureService, BuildReport},
    domain::{ModuleArchitecture, ModuleName},
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `strata new` command.
///
/// 1. Obtain the module name (argument or prompt) and validate it
/// 2. Resolve the target directory (`--dir`, config, or CWD)
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Build the module via `ArchitectureService`
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Module name
    let raw_name = match args.name {
        Some(name) => name,
        None if prompt::is_interactive() => prompt::module_name(&config.prompt.placeholder)?,
        None => {
            return Err(CliError::InvalidInput {
                message: "a module name is required".into(),
                source: None,
            });
        }
    };
    let name = ModuleName::new(&raw_name).map_err(|e| CliError::Core(e.into()))?;

    // 2. Target directory
    let candidate = target_candidate(args.dir, &config);
    let target = match check_target(&candidate) {
        Ok(target) => target,
        Err(err) if prompt::is_interactive() => {
            output.warning(&err.to_string())?;
            match prompt::target_directory() {
                Ok(dir) => check_target(&dir)?,
                // a dismissed prompt leaves the original complaint standing
                Err(CliError::Cancelled) => return Err(err),
                Err(other) => return Err(other),
            }
        }
        Err(err) => return Err(err),
    };
    debug!(module = %name, target = %target.display(), "Target resolved");

    let service = ArchitectureService::new(Box::new(LocalFilesystem::new()));

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&name, &target)?;
        return show_plan(&plan, &output);
    }

    // 4. Build
    info!(module = %name, target = %target.display(), "Module generation started");
    let report = service.build(&name, &target)?;

    show_report(&report, global.verbose > 0, &output)
}

// ── Target resolution ─────────────────────────────────────────────────────────

/// `--dir` wins over `defaults.target_dir`, which wins over the CWD.
fn target_candidate(dir: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    dir.or_else(|| config.defaults.target_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Make `path` absolute and require it to be an existing directory.
fn check_target(path: &Path) -> CliResult<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| CliError::InvalidTarget {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !absolute.exists() {
        return Err(CliError::InvalidTarget {
            path: absolute,
            reason: "does not exist".into(),
        });
    }
    if !absolute.is_dir() {
        return Err(CliError::InvalidTarget {
            path: absolute,
            reason: "is not a directory".into(),
        });
    }
    Ok(absolute)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &ModuleArchitecture, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        out.json(plan)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would generate {} module at {}",
        plan.name().pascal_case(),
        plan.module_root().display(),
    ))?;
    for request in plan.requests() {
        out.print(&format!(
            "  {:<24} {}",
            request.role.to_string(),
            request.path.display()
        ))?;
    }
    Ok(())
}

fn show_report(report: &BuildReport, verbose: bool, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        out.json(report)?;
        return Ok(());
    }

    out.success(&format!(
        "Successfully generated {} module",
        report.module.pascal_case()
    ))?;
    out.print(&format!("  Location: {}", report.module_root.display()))?;
    if verbose || report.existing > 0 {
        out.print(&format!(
            "  Directories: {} created, {} already present",
            report.created, report.existing
        ))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
