//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use classdoc::DocblockError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Docblock(e) => docblock_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a single-file core error to a miette Report
pub fn docblock_error_to_miette(err: DocblockError) -> Report {
    match err {
        DocblockError::Parse { path, message } => miette::miette!(
            code = "classdoc::parse",
            help = "Fix the syntax error; classdoc never rewrites a file it cannot parse",
            "Failed to parse {}\n{}",
            path.display(),
            message
        ),
        DocblockError::Io { path, error } => miette::miette!(
            code = "classdoc::io",
            "Failed to access {}: {}",
            path.display(),
            error
        ),
        DocblockError::OutputConflict { path, destination } => miette::miette!(
            code = "classdoc::conflict",
            help = "Run classdoc from a directory that contains every input, or use --in-place",
            "Output {} for {} is shared with another input",
            destination.display(),
            path.display()
        ),
    }
}
