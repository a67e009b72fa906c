//! Idempotent injection of a rendered block at the top of a source file.
//!
//! Injection is a value pipeline over the source text:
//!
//! 1. scan block comments and select every prior injected block,
//! 2. rebuild the text without those spans,
//! 3. prepend the new block (below a hashbang line, if any),
//! 4. drop any header block that still survives below the new one,
//! 5. normalize blank lines and the end of file.
//!
//! Applying it to its own output yields the same text. A file whose first
//! line ends in `\r\n` is processed with `\n` endings and written back with
//! `\r\n` throughout.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::comments::{is_injected_block, scan_comments};
use crate::error::Result;
use crate::model::{CommentBlock, DocBlock};

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid newline regex"));
static TRAILING_DEFAULT_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\}[ \t]*(?:\r?\n[ \t]*)+(export[ \t]+default\b[^\n]*\s*)$")
        .expect("valid default export regex")
});

/// Replace every prior injected block in `source` with `block`.
pub fn inject(path: impl AsRef<Path>, source: &str, block: &DocBlock) -> Result<String> {
    let path = path.as_ref();
    if !uses_crlf(source) {
        return inject_lf(path, source, block);
    }
    let output = inject_lf(path, &source.replace("\r\n", "\n"), block)?;
    Ok(output.replace('\n', "\r\n"))
}

fn uses_crlf(source: &str) -> bool {
    source
        .find('\n')
        .is_some_and(|idx| source[..idx].ends_with('\r'))
}

fn inject_lf(path: &Path, source: &str, block: &DocBlock) -> Result<String> {
    let prior: Vec<CommentBlock> = scan_comments(path, source)?
        .into_iter()
        .filter(|comment| is_injected_block(&comment.text))
        .collect();
    if !prior.is_empty() {
        debug!(path = %path.display(), count = prior.len(), "removing prior injected blocks");
    }
    let stripped = remove_comments(source, &prior);

    let (hashbang, body) = split_hashbang(&stripped);
    let body = strip_leading_blank_lines(body);

    let mut output = String::with_capacity(hashbang.len() + block.text.len() + body.len() + 2);
    output.push_str(hashbang);
    output.push_str(&block.text);
    output.push('\n');
    if !body.trim().is_empty() {
        output.push('\n');
        output.push_str(body);
    }

    let output = keep_first_header_block(path, output)?;
    Ok(normalize_whitespace(&output))
}

/// Remove every header block after the first one.
fn keep_first_header_block(path: &Path, text: String) -> Result<String> {
    let headers: Vec<CommentBlock> = scan_comments(path, &text)?
        .into_iter()
        .filter(|comment| is_injected_block(&comment.text))
        .collect();
    if headers.len() <= 1 {
        return Ok(text);
    }
    warn!(
        path = %path.display(),
        extra = headers.len() - 1,
        "injected block still duplicated after stripping, keeping the first"
    );
    Ok(remove_comments(&text, &headers[1..]))
}

/// Rebuild `source` without the given comments.
///
/// A comment alone on its line takes the whole line (indentation and line
/// break) with it. A comment ending a line takes the whitespace before it,
/// keeping the line break; otherwise only the comment itself is removed.
pub fn remove_comments(source: &str, comments: &[CommentBlock]) -> String {
    let mut spans: Vec<(usize, usize)> = comments
        .iter()
        .map(|comment| line_aware_span(source, comment.start as usize, comment.end as usize))
        .collect();
    spans.sort_unstable();

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for (start, end) in spans {
        if start < cursor {
            cursor = cursor.max(end);
            continue;
        }
        output.push_str(&source[cursor..start]);
        cursor = end;
    }
    output.push_str(&source[cursor..]);
    output
}

fn line_aware_span(source: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = source.as_bytes();

    let mut line_start = start;
    while line_start > 0 && matches!(bytes[line_start - 1], b' ' | b'\t') {
        line_start -= 1;
    }
    let owns_line_start = line_start == 0 || bytes[line_start - 1] == b'\n';

    let mut trailing_end = end;
    while trailing_end < bytes.len() && matches!(bytes[trailing_end], b' ' | b'\t') {
        trailing_end += 1;
    }
    let mut line_end = trailing_end;
    if line_end < bytes.len() && bytes[line_end] == b'\r' {
        line_end += 1;
    }
    let owns_line_end = line_end == bytes.len() || bytes[line_end] == b'\n';

    match (owns_line_start, owns_line_end) {
        (true, true) => {
            let line_end = if line_end < bytes.len() { line_end + 1 } else { line_end };
            (line_start, line_end)
        }
        (false, true) => (line_start, trailing_end),
        _ => (start, end),
    }
}

/// Split off a leading `#!` line so the block can go below it.
fn split_hashbang(text: &str) -> (&str, &str) {
    if !text.starts_with("#!") {
        return ("", text);
    }
    match text.find('\n') {
        Some(idx) => text.split_at(idx + 1),
        None => (text, ""),
    }
}

/// Drop whole blank lines at the start of `text`, keeping the first code line
/// intact.
fn strip_leading_blank_lines(text: &str) -> &str {
    let content = text.trim_start();
    let leading = &text[..text.len() - content.len()];
    match leading.rfind('\n') {
        Some(idx) => &text[idx + 1..],
        None => text,
    }
}

/// Collapse runs of blank lines, separate a trailing default export from the
/// closing brace above it, and end the file with exactly one newline.
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = EXCESS_NEWLINES.replace_all(text, "\n\n");
    let spaced = TRAILING_DEFAULT_EXPORT.replace(&collapsed, "}\n\n${1}");
    let mut output = spaced.trim_end().to_string();
    output.push('\n');
    output
}
