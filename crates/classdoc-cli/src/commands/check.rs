//! Check command implementation.
//!
//! Runs the pipeline without writing and fails when any file would change.

use std::time::Instant;

use classdoc::{OutputTarget, Pipeline, Runner};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// [`CliError::FilesFailed`] when a file cannot be parsed or read, otherwise
/// [`CliError::StaleFiles`] when at least one file's block is missing or
/// outdated.
pub fn execute(args: CheckArgs) -> Result<()> {
    let cwd = utils::resolve_cwd(args.cwd.as_deref())?;
    let config = utils::load_config(&args.overrides(), args.config.as_deref(), &cwd)?;
    let files = utils::discover_inputs(&config, &cwd)?;

    if !args.json {
        ui::info(&format!("Checking {} file(s)...", files.len()));
    }

    let start = Instant::now();
    let report =
        Runner::new(Pipeline::new(config.pipeline_options()), OutputTarget::InPlace).check(&files);
    let elapsed = start.elapsed();

    if args.json {
        utils::print_json(&report)?;
    } else {
        ui::print_check_summary(&report, &cwd, elapsed);
    }

    let stale = report.stale().count();
    if !report.is_success() {
        Err(CliError::FilesFailed(report.failed()))
    } else if stale > 0 {
        Err(CliError::StaleFiles(stale))
    } else {
        if !args.json {
            ui::success("All files are up to date");
        }
        Ok(())
    }
}
