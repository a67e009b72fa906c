#![deny(clippy::all)]

//! Class surface documentation for JavaScript / TypeScript sources.
//!
//! This crate provides:
//! - An extractor that parses a source file with OXC and lists the methods of
//!   its first class declaration, with one-line summaries from adjacent doc
//!   comments and `SECTION:` groupings.
//! - A renderer producing a single `Methods:` or `Contents` comment block.
//! - An idempotent injector that replaces any prior block at the top of the
//!   file.
//! - A parallel batch runner that reads, rewrites and reports on many files.
//!
//! ```rust
//! use classdoc::{Outcome, Pipeline};
//!
//! let source = "class Queue {\n  /** Adds an item. */\n  push(item) {}\n}\n";
//! let outcome = Pipeline::default().process_source("queue.js", source)?;
//! let Outcome::Rewritten(text) = outcome else { unreachable!() };
//! assert!(text.starts_with("/**\n * Methods:\n * - push() — Adds an item.\n */\n\n"));
//! # Ok::<(), classdoc::DocblockError>(())
//! ```

pub mod comments;
pub mod error;
pub mod extractor;
pub mod inject;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod runner;

pub use error::{DocblockError, ErrorKind, Result};
pub use extractor::{extract, extract_from_path};
pub use inject::inject;
pub use model::{
    BlockMode, CommentBlock, DocBlock, Extraction, MethodEntry, SectionAnchor,
};
pub use pipeline::{Outcome, Pipeline, PipelineOptions};
pub use render::{render, render_extraction};
pub use runner::{BatchReport, FileReport, FileStatus, OutputTarget, Runner};
