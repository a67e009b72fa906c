//! Formatting utilities for durations and batch summaries.

use std::path::Path;
use std::time::Duration;

use classdoc::{BatchReport, FileStatus};
use console::Term;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use classdoc_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the summary of an `inject` run to stderr.
///
/// Failed files are listed with their error, followed by the per-status
/// totals.
pub fn print_run_summary(report: &BatchReport, root: &Path, elapsed: Duration) {
    print_header("Summary");
    print_failures(report, root);
    print_rule();
    print_totals(
        &[
            ("rewritten", report.rewritten()),
            ("unchanged", report.unchanged()),
            ("skipped", report.skipped()),
            ("failed", report.failed()),
        ],
        elapsed,
    );
}

/// Print the summary of a `check` run to stderr, listing stale files.
pub fn print_check_summary(report: &BatchReport, root: &Path, elapsed: Duration) {
    print_header("Check");
    for file in report.stale() {
        let path = display_path(&file.path, root);
        if colors_enabled() {
            eprintln!("  {} {}", "▸".yellow(), path.bright_white());
        } else {
            eprintln!("  ▸ {}", path);
        }
    }
    print_failures(report, root);
    print_rule();
    print_totals(
        &[
            ("stale", report.stale().count()),
            ("up to date", report.unchanged() + report.skipped()),
            ("failed", report.failed()),
        ],
        elapsed,
    );
}

fn print_failures(report: &BatchReport, root: &Path) {
    for file in report.failures() {
        let FileStatus::Failed { kind, message } = &file.status else {
            continue;
        };
        let path = display_path(&file.path, root);
        if colors_enabled() {
            eprintln!(
                "  {} {} {}",
                "✗".red(),
                path.bright_white().bold(),
                format!("({kind})").dimmed()
            );
            eprintln!("    {}", message.dimmed());
        } else {
            eprintln!("  ✗ {} ({kind})", path);
            eprintln!("    {}", message);
        }
    }
}

fn print_header(title: &str) {
    if colors_enabled() {
        eprintln!("\n{}", title.bold().underline());
    } else {
        eprintln!("\n{}", title);
    }
    print_rule();
}

fn print_rule() {
    let width = Term::stderr().size().1 as usize;
    eprintln!("{}", "─".repeat(width.min(80)));
}

fn print_totals(counts: &[(&str, usize)], elapsed: Duration) {
    let line = format_counts(counts);
    if colors_enabled() {
        eprintln!(
            "  {} {} in {}",
            "Total:".bold(),
            line.green(),
            format_duration(elapsed).green()
        );
    } else {
        eprintln!("  Total: {} in {}", line, format_duration(elapsed));
    }
}

fn format_counts(counts: &[(&str, usize)]) -> String {
    counts
        .iter()
        .map(|(label, count)| format!("{count} {label}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
