//! Block comment collection and classification.
//!
//! Comments are kept as a flat list sorted by position. Association with class
//! members is purely offset based and never looks at the tree shape.

use std::path::Path;
use std::sync::LazyLock;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use regex::Regex;

use crate::error::Result;
use crate::model::CommentBlock;
use crate::parser::{ParseOptions, parse};

/// Header line of a flat injected block.
pub const METHODS_HEADER: &str = "Methods:";
/// Header line of a sectioned injected block.
pub const CONTENTS_HEADER: &str = "Contents";

static SECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SECTION:").expect("valid section regex"));
static SECTION_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)SECTION:[ \t]*([^\r\n]*)").expect("valid section title regex")
});
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("valid blank line regex"));

/// Collect every block comment of a parsed program, sorted by start offset.
pub fn collect_block_comments(program: &Program<'_>, source: &str) -> Vec<CommentBlock> {
    let mut comments: Vec<CommentBlock> = program
        .comments
        .iter()
        .filter(|comment| comment.is_block())
        .map(|comment| {
            let content = comment.content_span();
            CommentBlock::new(
                comment.span.start,
                comment.span.end,
                &source[content.start as usize..content.end as usize],
            )
        })
        .collect();
    comments.sort_by_key(|comment| comment.start);
    comments
}

/// Parse `source` only to list its block comments.
pub fn scan_comments(path: &Path, source: &str) -> Result<Vec<CommentBlock>> {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, path, source, ParseOptions::from_path(path))?;
    Ok(collect_block_comments(&parsed.program, parsed.source_text))
}

/// Strip the `*` continuation markers and surrounding whitespace of a line.
pub(crate) fn strip_continuation(line: &str) -> &str {
    line.trim().trim_start_matches('*').trim()
}

/// `true` when the comment body holds a `Methods:` or `Contents` header line.
pub fn is_injected_block(text: &str) -> bool {
    text.lines()
        .map(strip_continuation)
        .any(|line| line == METHODS_HEADER || line == CONTENTS_HEADER)
}

/// `true` when the comment body contains a `SECTION:` marker anywhere.
pub fn is_section_marker(text: &str) -> bool {
    SECTION_MARKER.is_match(text)
}

/// Title of the first `SECTION:` line, or `None` when absent or blank.
pub fn section_title(text: &str) -> Option<String> {
    let captures = SECTION_TITLE.captures(text)?;
    let title = captures
        .get(1)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .trim()
        .trim_end_matches('*')
        .trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// First non-empty, non-annotation line of a doc comment body.
pub fn summary_line(text: &str) -> Option<String> {
    text.lines()
        .map(strip_continuation)
        .find(|line| !line.is_empty() && !line.starts_with('@'))
        .map(str::to_string)
}

/// Position-sorted comments with nearest-preceding lookup.
#[derive(Debug, Default)]
pub struct CommentIndex {
    comments: Vec<CommentBlock>,
}

impl CommentIndex {
    /// Build the index; input order does not matter.
    pub fn new(mut comments: Vec<CommentBlock>) -> Self {
        comments.sort_by_key(|comment| (comment.end, comment.start));
        Self { comments }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommentBlock> {
        self.comments.iter()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// The comment with the greatest end offset that is `<= offset`.
    pub fn nearest_before(&self, offset: u32) -> Option<&CommentBlock> {
        let idx = self.comments.partition_point(|comment| comment.end <= offset);
        idx.checked_sub(1).map(|idx| &self.comments[idx])
    }

    /// Summary for a member starting at `member_start`, or an empty string.
    ///
    /// The nearest preceding comment only counts when it is not a section
    /// marker and the text between it and the member holds nothing but
    /// whitespace and line comments, with no blank line.
    pub fn summary_for(&self, source: &str, member_start: u32) -> String {
        let Some(comment) = self.nearest_before(member_start) else {
            return String::new();
        };
        if is_section_marker(&comment.text) {
            return String::new();
        }
        let gap = &source[comment.end as usize..member_start as usize];
        if !is_adjacent_gap(gap) {
            return String::new();
        }
        summary_line(&comment.text).unwrap_or_default()
    }
}

fn is_adjacent_gap(gap: &str) -> bool {
    !BLANK_LINE.is_match(gap)
        && gap.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with("//"))
}
