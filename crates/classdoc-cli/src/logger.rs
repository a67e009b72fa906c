//! Logging setup for the classdoc CLI.
//!
//! Uses the `tracing` ecosystem. The core library emits per-file debug events
//! and a warning for every file that fails; this module decides which of them
//! reach the terminal.
//!
//! # Example
//!
//! ```rust,no_run
//! use classdoc_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Documenting sources");
//! debug!("Processing file: {}", "src/User.js");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used for `--verbose`.
pub const VERBOSE_FILTER: &str = "classdoc=debug,classdoc_cli=debug";

/// Filter used for `--quiet`.
pub const QUIET_FILTER: &str = "classdoc=error,classdoc_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "classdoc=info,classdoc_cli=info";

/// Initialize the tracing subscriber.
///
/// Call once at startup, before anything logs.
///
/// # Verbosity Levels
///
/// 1. `--verbose`: DEBUG for the classdoc crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`: custom filter
/// 4. Default: INFO
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize the subscriber with an explicit filter.
///
/// Repeated initialization (as happens in tests) is ignored.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
