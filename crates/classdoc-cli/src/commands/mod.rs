//! Command implementations for the classdoc CLI.
//!
//! - [`inject`] - Document files into the output directory or in place
//! - [`check`] - Report stale files without writing
//! - [`print`] - Render the block for one file
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod inject;
pub mod print;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use inject::execute as inject_execute;
pub use print::execute as print_execute;
