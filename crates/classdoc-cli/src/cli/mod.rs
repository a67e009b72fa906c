//! Command-line interface definition for classdoc.
//!
//! # Command Structure
//!
//! - `classdoc inject` - Write the method index into every matched file
//! - `classdoc check` - Report files whose index is missing or outdated
//! - `classdoc print` - Show the index for a single file

mod commands;
mod tests;

use clap::Parser;

pub use commands::{CheckArgs, Command, InjectArgs, PrintArgs};

/// classdoc - keeps a method index at the top of JavaScript class files
#[derive(Parser, Debug)]
#[command(
    name = "classdoc",
    version,
    about = "Keeps a method index at the top of JavaScript class files",
    long_about = "classdoc parses each source file, lists the methods of its first class\n\
                  with one-line summaries from their doc comments, and writes that list as\n\
                  a single comment block at the top of the file. Re-running replaces the\n\
                  block instead of stacking a new one."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
