//! Expansion of input selectors into the list of files to document.
//!
//! A selector is handled as:
//! - an existing file: taken as-is
//! - an existing directory: walked for JavaScript and TypeScript sources
//! - anything else: a glob pattern, matched while walking from its literal
//!   prefix directory
//!
//! `node_modules` and any excluded directory (such as the output directory)
//! are never entered. The result is de-duplicated and sorted.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ConfigError, Result};

/// Extensions picked up when walking a directory selector.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

const SKIPPED_DIRS: &[&str] = &["node_modules"];
const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Resolves selectors relative to a working directory.
#[derive(Debug, Clone)]
pub struct Discovery {
    cwd: PathBuf,
    excluded: Vec<PathBuf>,
}

impl Discovery {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            excluded: Vec::new(),
        }
    }

    /// Never descend into `dir` while walking.
    pub fn exclude(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excluded.push(dir.into());
        self
    }

    /// Expand every selector; paths in the result are absolute (joined onto
    /// the working directory).
    pub fn discover(&self, selectors: &[String]) -> Result<Vec<PathBuf>> {
        let mut found = BTreeSet::new();
        for selector in selectors {
            let matched = self.expand(selector, &mut found)?;
            if matched == 0 {
                warn!(selector = %selector, "input selector matched no files");
            } else {
                debug!(selector = %selector, matched, "expanded input selector");
            }
        }
        Ok(found.into_iter().collect())
    }

    fn expand(&self, selector: &str, found: &mut BTreeSet<PathBuf>) -> Result<usize> {
        let selector = selector.trim();
        let selector = selector.strip_prefix("./").unwrap_or(selector);
        let path = match selector {
            "" | "." => self.cwd.clone(),
            _ => self.resolve(Path::new(selector)),
        };

        if path.is_file() {
            found.insert(path);
            return Ok(1);
        }

        if path.is_dir() {
            let mut matched = 0;
            for file in self.walk(&path).filter(|file| is_source_file(file)) {
                found.insert(file);
                matched += 1;
            }
            return Ok(matched);
        }

        let matcher = compile_glob(selector)?;
        let prefix = literal_prefix(selector);
        let base = if prefix.as_os_str().is_empty() {
            self.cwd.clone()
        } else {
            self.resolve(&prefix)
        };
        if !base.is_dir() {
            return Ok(0);
        }

        let absolute = Path::new(selector).is_absolute();
        let mut matched = 0;
        for file in self.walk(&base) {
            let candidate = if absolute {
                file.as_path()
            } else {
                file.strip_prefix(&self.cwd).unwrap_or(&file)
            };
            if matcher.is_match(candidate) {
                found.insert(file);
                matched += 1;
            }
        }
        Ok(matched)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    fn walk<'a>(&'a self, root: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(move |entry| !self.is_skipped(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(%err, "skipping unreadable path");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let skipped_name = entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name));
        skipped_name || self.excluded.iter().any(|dir| entry.path() == dir)
    }
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
            .into()
        })
}

/// Leading components of `pattern` that contain no glob syntax.
fn literal_prefix(pattern: &str) -> PathBuf {
    let mut prefix = PathBuf::new();
    for component in Path::new(pattern).components() {
        if component.as_os_str().to_string_lossy().contains(GLOB_META) {
            break;
        }
        prefix.push(component);
    }
    prefix
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        for file in [
            "src/App.js",
            "src/models/User.jsx",
            "src/models/Repo.ts",
            "src/styles.css",
            "src/node_modules/dep/index.js",
            "lib/legacy.cjs",
            "documented/src/App.js",
        ] {
            let path = temp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "class X {}\n").unwrap();
        }
        temp
    }

    fn relative(temp: &TempDir, files: Vec<PathBuf>) -> Vec<String> {
        files
            .iter()
            .map(|file| {
                file.strip_prefix(temp.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_directory_selector_walks_sources() {
        let temp = project();
        let files = Discovery::new(temp.path())
            .discover(&["src".to_string()])
            .unwrap();
        assert_eq!(
            relative(&temp, files),
            vec!["src/App.js", "src/models/Repo.ts", "src/models/User.jsx"]
        );
    }

    #[test]
    fn test_glob_selector_matches_from_literal_prefix() {
        let temp = project();
        let files = Discovery::new(temp.path())
            .discover(&["src/**/*.{js,jsx,mjs,cjs}".to_string()])
            .unwrap();
        assert_eq!(relative(&temp, files), vec!["src/App.js", "src/models/User.jsx"]);
    }

    #[test]
    fn test_file_selector_is_taken_as_is_and_deduplicated() {
        let temp = project();
        let files = Discovery::new(temp.path())
            .discover(&[
                "src/styles.css".to_string(),
                "./src/App.js".to_string(),
                "src/*.js".to_string(),
            ])
            .unwrap();
        assert_eq!(relative(&temp, files), vec!["src/App.js", "src/styles.css"]);
    }

    #[test]
    fn test_excluded_directory_is_not_walked() {
        let temp = project();
        let files = Discovery::new(temp.path())
            .exclude(temp.path().join("documented"))
            .discover(&[".".to_string()])
            .unwrap();
        assert_eq!(
            relative(&temp, files),
            vec![
                "lib/legacy.cjs",
                "src/App.js",
                "src/models/Repo.ts",
                "src/models/User.jsx"
            ]
        );
    }

    #[test]
    fn test_unmatched_selector_yields_nothing() {
        let temp = project();
        let files = Discovery::new(temp.path())
            .discover(&["missing/**/*.js".to_string(), "nope.js".to_string()])
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_glob_is_a_config_error() {
        let temp = project();
        let err = Discovery::new(temp.path())
            .discover(&["src/{a,b".to_string()])
            .unwrap_err();
        assert!(err.to_string().contains("Invalid glob pattern"));
    }

    #[test]
    fn test_literal_prefix() {
        assert_eq!(literal_prefix("src/**/*.js"), PathBuf::from("src"));
        assert_eq!(literal_prefix("*.js"), PathBuf::new());
        assert_eq!(literal_prefix("a/b/c?.js"), PathBuf::from("a/b"));
    }
}
