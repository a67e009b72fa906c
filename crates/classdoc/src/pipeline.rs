use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::extractor::extract;
use crate::inject::inject;
use crate::model::{DocBlock, Extraction};
use crate::render::render_extraction;

/// Options controlling the per-file pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Leave files with no documented methods untouched instead of injecting
    /// an empty `Methods:` block.
    pub skip_empty: bool,
}

/// Result of running the pipeline on one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The text changed; carries the new contents.
    Rewritten(String),
    /// The injected block was already current.
    Unchanged,
    /// No methods were found and `skip_empty` is set.
    Skipped,
}

impl Outcome {
    /// The text to write for `original`, if anything should be written.
    pub fn text<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            Self::Rewritten(text) => text,
            Self::Unchanged | Self::Skipped => original,
        }
    }
}

/// Extract → render → inject for a single file.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    /// Create a pipeline with the provided options.
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    /// Extract and render without touching the source.
    pub fn render_block(
        &self,
        path: impl AsRef<Path>,
        source: &str,
    ) -> Result<(Extraction, DocBlock)> {
        let extraction = extract(path, source)?;
        let block = render_extraction(&extraction);
        Ok((extraction, block))
    }

    /// Run the whole pipeline on `source`.
    ///
    /// A parse failure is returned as an error and no text is produced.
    pub fn process_source(&self, path: impl AsRef<Path>, source: &str) -> Result<Outcome> {
        let path = path.as_ref();
        let (extraction, block) = self.render_block(path, source)?;

        if extraction.is_empty() && self.options.skip_empty {
            debug!(path = %path.display(), "no methods, skipping injection");
            return Ok(Outcome::Skipped);
        }

        let rewritten = inject(path, source, &block)?;
        if rewritten == source {
            debug!(path = %path.display(), "docblock already current");
            Ok(Outcome::Unchanged)
        } else {
            debug!(path = %path.display(), mode = ?block.mode, "docblock rewritten");
            Ok(Outcome::Rewritten(rewritten))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_run_is_unchanged() {
        let pipeline = Pipeline::default();
        let source = "class A {\n  /** Does a. */\n  a() {}\n}\n";
        let Outcome::Rewritten(first) = pipeline.process_source("a.js", source).expect("valid")
        else {
            panic!("first run should rewrite");
        };
        assert_eq!(
            pipeline.process_source("a.js", &first).expect("valid"),
            Outcome::Unchanged
        );
    }

    #[test]
    fn skip_empty_leaves_classless_files() {
        let pipeline = Pipeline::new(PipelineOptions { skip_empty: true });
        let outcome = pipeline
            .process_source("util.js", "export const x = 1;\n")
            .expect("valid");
        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(outcome.text("export const x = 1;\n"), "export const x = 1;\n");
    }

    #[test]
    fn empty_class_gets_header_only_block_by_default() {
        let outcome = Pipeline::default()
            .process_source("util.js", "export const x = 1;\n")
            .expect("valid");
        assert_eq!(
            outcome,
            Outcome::Rewritten("/**\n * Methods:\n */\n\nexport const x = 1;\n".to_string())
        );
    }
}
