//! classdoc CLI - keeps a method index at the top of JavaScript class files.
//!
//! This crate wraps the `classdoc` library in a command-line tool:
//!
//! - [`cli`] - Argument definitions (`inject`, `check`, `print`)
//! - [`config`] - Layered configuration from `classdoc.config.json`,
//!   `CLASSDOC_*` environment variables and flags
//! - [`discovery`] - Expansion of file, directory and glob selectors
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - Status lines and run summaries
//!
//! # Example
//!
//! ```rust,no_run
//! use classdoc_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
