use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Available classdoc subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the method index into every matched file
    ///
    /// By default the documented tree is written to the output directory and
    /// the sources are left alone. With --in-place, changed files are
    /// rewritten where they are.
    Inject(InjectArgs),

    /// Report files whose method index is missing or outdated
    ///
    /// Nothing is written. Exits with an error when any file is stale or
    /// cannot be parsed, which makes it suitable for CI.
    Check(CheckArgs),

    /// Print the method index for a single file to stdout
    Print(PrintArgs),
}

/// Arguments for the inject command
#[derive(Args, Debug, Default)]
pub struct InjectArgs {
    /// Files, directories or glob patterns to document
    ///
    /// Defaults to the 'input' setting (src/**/*.{js,jsx,mjs,cjs}).
    ///
    /// Examples:
    ///   classdoc inject src/models
    ///   classdoc inject 'lib/**/*.mjs' src/App.js
    #[arg(value_name = "INPUT")]
    pub input: Vec<String>,

    /// Directory receiving the documented tree
    #[arg(short, long, value_name = "DIR", conflicts_with = "in_place")]
    pub out_dir: Option<PathBuf>,

    /// Rewrite changed sources in place
    #[arg(short = 'i', long)]
    pub in_place: bool,

    /// Leave files without class methods untouched
    #[arg(long)]
    pub skip_empty: bool,

    /// Path to classdoc.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the batch report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Working directory that inputs and outDir are resolved against
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

impl InjectArgs {
    /// Flags that were actually given, as configuration overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            out_dir: self.out_dir.clone(),
            // --out-dir also switches an in-place config back to directory output
            in_place: if self.in_place {
                Some(true)
            } else {
                self.out_dir.as_ref().map(|_| false)
            },
            skip_empty: self.skip_empty.then_some(true),
        }
    }
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Files, directories or glob patterns to check
    #[arg(value_name = "INPUT")]
    pub input: Vec<String>,

    /// Treat files without class methods as up to date when unmarked
    #[arg(long)]
    pub skip_empty: bool,

    /// Path to classdoc.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the batch report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Working directory that inputs are resolved against
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

impl CheckArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            skip_empty: self.skip_empty.then_some(true),
            ..ConfigOverrides::default()
        }
    }
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Source file to render
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the extracted methods and sections with the block as JSON
    #[arg(long)]
    pub json: bool,
}
