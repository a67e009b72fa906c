//! Shared utilities for command implementations.

use crate::config::{ClassdocConfig, ConfigOverrides};
use crate::discovery::Discovery;
use crate::error::{CliError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// Working directory for a command: `--cwd` when given, else the process one.
pub fn resolve_cwd(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = get_cwd()?;
    let Some(cwd) = cwd else {
        return Ok(current);
    };
    let resolved = resolve_path(cwd, &current);
    if !resolved.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Working directory does not exist: {}",
            resolved.display()
        )));
    }
    Ok(resolved)
}

/// Load and validate the layered configuration.
pub fn load_config(
    overrides: &ConfigOverrides,
    config_path: Option<&Path>,
    cwd: &Path,
) -> Result<ClassdocConfig> {
    let config = ClassdocConfig::load(overrides, config_path, cwd)?;
    config.validate()?;
    Ok(config)
}

/// Expand the configured selectors, failing when nothing matched.
///
/// The output directory is excluded from the walk so documented copies are
/// never picked up as inputs.
pub fn discover_inputs(config: &ClassdocConfig, cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut discovery = Discovery::new(cwd);
    if !config.in_place {
        discovery = discovery.exclude(resolve_path(&config.out_dir, cwd));
    }

    let files = discovery.discover(&config.input)?;
    if files.is_empty() {
        return Err(CliError::NoInputs {
            patterns: config.input.join(", "),
        });
    }
    Ok(files)
}

/// Pretty-print a value as JSON on stdout.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
