//! Configuration for classdoc with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::ConfigOverrides;

/// classdoc configuration - loaded from classdoc.config.json, `CLASSDOC_*`
/// variables and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClassdocConfig {
    /// Files, directories or glob patterns to document
    #[serde(default = "default_input")]
    pub input: Vec<String>,

    /// Directory receiving the documented tree
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Rewrite sources where they are instead of writing to `outDir`
    #[serde(default)]
    pub in_place: bool,

    /// Leave files without class methods untouched
    #[serde(default)]
    pub skip_empty: bool,
}

impl Default for ClassdocConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            out_dir: default_out_dir(),
            in_place: false,
            skip_empty: false,
        }
    }
}

impl ClassdocConfig {
    /// Pipeline options derived from this configuration.
    pub fn pipeline_options(&self) -> classdoc::PipelineOptions {
        classdoc::PipelineOptions {
            skip_empty: self.skip_empty,
        }
    }
}
