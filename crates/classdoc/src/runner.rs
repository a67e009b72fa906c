//! Batch processing of many files on disk.
//!
//! Files are independent, so the runner fans them out with `rayon`. A failure
//! in one file is recorded in the report and never stops the batch; nothing is
//! written for a failed file. In directory mode, inputs that would land on the
//! same output file all fail with a conflict and none of them is written.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Component, Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{DocblockError, ErrorKind, Result};
use crate::pipeline::{Outcome, Pipeline};

/// Where processed files are written.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Mirror every processed file under `out_dir`, relative to `root`.
    Directory {
        /// Destination directory.
        out_dir: PathBuf,
        /// Base that input paths are made relative to.
        root: PathBuf,
    },
    /// Overwrite changed files where they are.
    InPlace,
}

/// Runs the pipeline over a set of files.
#[derive(Debug, Clone)]
pub struct Runner {
    pipeline: Pipeline,
    target: OutputTarget,
}

impl Runner {
    /// Creates a runner writing to `target`.
    pub fn new(pipeline: Pipeline, target: OutputTarget) -> Self {
        Self { pipeline, target }
    }

    /// Process and write every file.
    pub fn run(&self, paths: &[PathBuf]) -> BatchReport {
        self.process_all(paths, true)
    }

    /// Process every file without writing, reporting which ones would change.
    pub fn check(&self, paths: &[PathBuf]) -> BatchReport {
        self.process_all(paths, false)
    }

    /// Destination of `path` under the configured target.
    pub fn output_path(&self, path: &Path) -> PathBuf {
        match &self.target {
            OutputTarget::Directory { out_dir, root } => {
                out_dir.join(relative_output_path(root, path))
            }
            OutputTarget::InPlace => path.to_path_buf(),
        }
    }

    fn process_all(&self, paths: &[PathBuf], write: bool) -> BatchReport {
        let conflicts = if write {
            self.conflicting_inputs(paths)
        } else {
            HashSet::new()
        };

        let mut files: Vec<FileReport> = paths
            .par_iter()
            .map(|path| {
                let result = if conflicts.contains(path.as_path()) {
                    Err(DocblockError::output_conflict(path, self.output_path(path)))
                } else {
                    self.process_file(path, write)
                };
                let status = match result {
                    Ok(status) => status,
                    Err(error) => {
                        warn!(path = %path.display(), %error, "failed to document file");
                        FileStatus::Failed {
                            kind: error.kind(),
                            message: error.to_string(),
                        }
                    }
                };
                FileReport {
                    path: path.clone(),
                    status,
                }
            })
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        BatchReport { files }
    }

    /// Distinct inputs whose output paths coincide.
    fn conflicting_inputs<'p>(&self, paths: &'p [PathBuf]) -> HashSet<&'p Path> {
        if !matches!(self.target, OutputTarget::Directory { .. }) {
            return HashSet::new();
        }
        let mut by_destination: HashMap<PathBuf, HashSet<&Path>> = HashMap::new();
        for path in paths {
            by_destination
                .entry(self.output_path(path))
                .or_default()
                .insert(path.as_path());
        }
        by_destination
            .into_values()
            .filter(|inputs| inputs.len() > 1)
            .flatten()
            .collect()
    }

    fn process_file(&self, path: &Path, write: bool) -> Result<FileStatus> {
        let source = fs::read_to_string(path).map_err(|error| DocblockError::io(path, error))?;
        let outcome = self.pipeline.process_source(path, &source)?;
        let status = FileStatus::from(&outcome);

        if write {
            match &self.target {
                OutputTarget::Directory { .. } => {
                    self.write_output(&self.output_path(path), outcome.text(&source))?;
                }
                OutputTarget::InPlace => {
                    if let Outcome::Rewritten(text) = &outcome {
                        self.write_output(path, text)?;
                    }
                }
            }
        }

        Ok(status)
    }

    fn write_output(&self, destination: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|error| DocblockError::io(parent, error))?;
        }
        fs::write(destination, contents).map_err(|error| DocblockError::io(destination, error))?;
        debug!(path = %destination.display(), "wrote documented source");
        Ok(())
    }
}

/// `path` relative to `root`, reduced to plain components so the result never
/// escapes the output directory.
fn relative_output_path(root: &Path, path: &Path) -> PathBuf {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .collect()
}

/// Per-file result in a batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Rewritten,
    Unchanged,
    Skipped,
    Failed {
        /// Error category.
        kind: ErrorKind,
        /// Human-readable error.
        message: String,
    },
}

impl From<&Outcome> for FileStatus {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Rewritten(_) => Self::Rewritten,
            Outcome::Unchanged => Self::Unchanged,
            Outcome::Skipped => Self::Skipped,
        }
    }
}

/// One processed file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Input path as given.
    pub path: PathBuf,
    /// What happened to it.
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Outcome of a batch, sorted by input path.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BatchReport {
    /// One entry per input file.
    pub files: Vec<FileReport>,
}

impl BatchReport {
    fn count(&self, predicate: impl Fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|file| predicate(&file.status)).count()
    }

    pub fn rewritten(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Rewritten))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Failed { .. }))
    }

    /// Files that failed, with their error details.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|file| matches!(file.status, FileStatus::Failed { .. }))
    }

    /// Files whose text would change (or did change).
    pub fn stale(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|file| matches!(file.status, FileStatus::Rewritten))
    }

    /// `true` when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}
