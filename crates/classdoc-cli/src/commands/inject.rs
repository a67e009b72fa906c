//! Inject command implementation.

use std::time::Instant;

use classdoc::{OutputTarget, Pipeline, Runner};
use tracing::debug;

use crate::cli::InjectArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the inject command.
///
/// # Steps
///
/// 1. Load and validate the layered configuration
/// 2. Expand input selectors into files
/// 3. Run the pipeline over every file in parallel and write the results
/// 4. Print the summary (or the JSON report)
///
/// # Errors
///
/// Configuration problems and empty inputs fail before any file is touched.
/// Per-file failures do not stop the batch; they are reported and turn into
/// [`CliError::FilesFailed`] at the end.
pub fn execute(args: InjectArgs) -> Result<()> {
    let cwd = utils::resolve_cwd(args.cwd.as_deref())?;
    let config = utils::load_config(&args.overrides(), args.config.as_deref(), &cwd)?;
    let files = utils::discover_inputs(&config, &cwd)?;
    debug!(files = files.len(), in_place = config.in_place, "starting inject");

    let out_dir = utils::resolve_path(&config.out_dir, &cwd);
    let target = if config.in_place {
        OutputTarget::InPlace
    } else {
        OutputTarget::Directory {
            out_dir: out_dir.clone(),
            root: cwd.clone(),
        }
    };

    if !args.json {
        ui::info(&format!("Documenting {} file(s)...", files.len()));
    }

    let start = Instant::now();
    let report = Runner::new(Pipeline::new(config.pipeline_options()), target).run(&files);
    let elapsed = start.elapsed();

    if args.json {
        utils::print_json(&report)?;
    } else {
        ui::print_run_summary(&report, &cwd, elapsed);
        if report.is_success() {
            if config.in_place {
                ui::success(&format!("Updated {} file(s) in place", report.rewritten()));
            } else {
                ui::success(&format!("Documented sources written to {}", out_dir.display()));
            }
        }
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::FilesFailed(report.failed()))
    }
}
