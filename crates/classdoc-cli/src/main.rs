//! classdoc CLI entry point.
//!
//! Parses arguments, sets up logging and colors, then dispatches to the
//! selected command.

use clap::Parser;
use classdoc_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !ui::should_use_color();
    logger::init_logger(args.verbose, args.quiet, no_color);
    ui::init_colors(no_color);

    let result = match args.command {
        cli::Command::Inject(inject_args) => commands::inject_execute(inject_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Print(print_args) => commands::print_execute(print_args),
    };

    result.map_err(error::cli_error_to_miette)
}
