//! Terminal output: status lines and run summaries.
//!
//! Everything here writes to stderr so stdout stays free for `--json` reports
//! and `print` output.
//!
//! ```no_run
//! use classdoc_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Documented 3 files");
//! ui::error("Failed to parse src/Broken.js");
//! ```

mod format;
mod messages;

pub use format::{format_duration, print_check_summary, print_run_summary};
pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise colors follow whether stderr
/// is attended.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support for stderr output.
///
/// `--no-color` or an environment that should not get colors turns styling
/// off for the rest of the process.
pub fn init_colors(no_color: bool) {
    console::set_colors_enabled_stderr(!no_color && should_use_color());
}

pub(crate) fn colors_enabled() -> bool {
    console::colors_enabled_stderr()
}
