//! Print command implementation.

use std::path::Path;

use classdoc::{DocBlock, Extraction, Pipeline};
use serde::Serialize;

use crate::cli::PrintArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};

#[derive(Serialize)]
struct PrintReport<'a> {
    path: &'a Path,
    extraction: &'a Extraction,
    block: &'a DocBlock,
}

/// Execute the print command: render the block for one file to stdout
/// without modifying it.
pub fn execute(args: PrintArgs) -> Result<()> {
    let path = utils::resolve_path(&args.file, &utils::get_cwd()?);
    let source = std::fs::read_to_string(&path).with_path(&path)?;
    let (extraction, block) = Pipeline::default().render_block(&path, &source)?;

    if args.json {
        utils::print_json(&PrintReport {
            path: &args.file,
            extraction: &extraction,
            block: &block,
        })
    } else {
        println!("{block}");
        Ok(())
    }
}
