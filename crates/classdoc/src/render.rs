//! Rendering of the injected documentation block.
//!
//! Two shapes exist. A flat `Methods:` list is used when no section anchor
//! resolved; otherwise a `Contents` block groups methods under their section
//! titles.

use std::borrow::Cow;
use std::fmt::Write;

use crate::comments::{CONTENTS_HEADER, METHODS_HEADER};
use crate::model::{BlockMode, DocBlock, Extraction, MethodEntry, SectionAnchor};

/// Pick the block mode for a set of anchors.
pub fn select_mode(anchors: &[SectionAnchor]) -> BlockMode {
    if anchors.is_empty() {
        BlockMode::Methods
    } else {
        BlockMode::Contents
    }
}

/// Render the block for an extraction result.
pub fn render_extraction(extraction: &Extraction) -> DocBlock {
    render(&extraction.methods, &extraction.anchors)
}

/// Render the documentation block for `methods` grouped by `anchors`.
pub fn render(methods: &[MethodEntry], anchors: &[SectionAnchor]) -> DocBlock {
    let mode = select_mode(anchors);
    let mut lines = vec!["/**".to_string()];

    match mode {
        BlockMode::Methods => {
            lines.push(format!(" * {METHODS_HEADER}"));
            lines.extend(methods.iter().map(method_line));
        }
        BlockMode::Contents => {
            lines.push(format!(" * {CONTENTS_HEADER}"));
            for (title, group) in section_groups(methods, anchors) {
                lines.push(" *".to_string());
                lines.push(format!(" * [{}]", escape_comment_text(title)));
                lines.extend(group.iter().map(method_line));
            }
        }
    }

    lines.push(" */".to_string());
    DocBlock {
        mode,
        text: lines.join("\n"),
    }
}

/// Slice `methods` into one contiguous group per anchor.
///
/// Methods before the first anchor belong to no group. An anchor sharing its
/// index with the next one gets an empty group.
pub fn section_groups<'m>(
    methods: &'m [MethodEntry],
    anchors: &'m [SectionAnchor],
) -> Vec<(&'m str, &'m [MethodEntry])> {
    anchors
        .iter()
        .enumerate()
        .map(|(i, anchor)| {
            let end = anchors
                .get(i + 1)
                .map_or(methods.len(), |next| next.anchor_index)
                .min(methods.len());
            let start = anchor.anchor_index.min(end);
            (anchor.title.as_str(), &methods[start..end])
        })
        .collect()
}

fn method_line(method: &MethodEntry) -> String {
    let mut line = format!(" * - {}()", escape_comment_text(&method.name));
    if !method.summary.is_empty() {
        let _ = write!(line, " — {}", escape_comment_text(&method.summary));
    }
    line
}

/// Keep text from closing the block early or breaking it across lines.
///
/// String-literal member names may hold `*/` or line terminators.
pub fn escape_comment_text(text: &str) -> Cow<'_, str> {
    if !text.contains("*/") && !text.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 2);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '*' if chars.peek() == Some(&'/') => escaped.push_str("*\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(name: &str, position: u32, summary: &str) -> MethodEntry {
        MethodEntry::new(name, position, summary)
    }

    #[test]
    fn mode_follows_anchor_count() {
        assert_eq!(select_mode(&[]), BlockMode::Methods);
        assert_eq!(
            select_mode(&[SectionAnchor::new("Init", 0)]),
            BlockMode::Contents
        );
    }

    #[test]
    fn renders_flat_methods() {
        let block = render(
            &[method("open", 10, "Opens the socket."), method("close", 20, "")],
            &[],
        );
        assert_eq!(block.mode, BlockMode::Methods);
        assert_eq!(
            block.text,
            "/**\n * Methods:\n * - open() — Opens the socket.\n * - close()\n */"
        );
    }

    #[test]
    fn escapes_comment_terminators_in_names() {
        assert_eq!(escape_comment_text("save"), "save");
        assert_eq!(escape_comment_text("a*/b"), "a*\\/b");
        assert_eq!(escape_comment_text("line\nbreak"), "line\\nbreak");

        let block = render(&[method("a*/b", 1, "")], &[SectionAnchor::new("x*/y", 0)]);
        assert_eq!(
            block.text,
            "/**\n * Contents\n *\n * [x*\\/y]\n * - a*\\/b()\n */"
        );
    }

    #[test]
    fn renders_empty_methods_block() {
        let block = render(&[], &[]);
        assert_eq!(block.text, "/**\n * Methods:\n */");
    }

    #[test]
    fn omits_methods_before_first_section() {
        let methods = [method("setup", 1, ""), method("start", 2, ""), method("stop", 3, "")];
        let anchors = [SectionAnchor::new("Lifecycle", 1)];
        let block = render(&methods, &anchors);
        assert_eq!(block.mode, BlockMode::Contents);
        assert_eq!(
            block.text,
            "/**\n * Contents\n *\n * [Lifecycle]\n * - start()\n * - stop()\n */"
        );
    }

    #[test]
    fn duplicate_anchor_renders_empty_group() {
        let methods = [method("a", 1, ""), method("b", 2, "")];
        let anchors = [SectionAnchor::new("First", 0), SectionAnchor::new("Second", 0)];
        let groups = section_groups(&methods, &anchors);
        assert_eq!(groups[0].0, "First");
        assert!(groups[0].1.is_empty());
        assert_eq!(groups[1].1.len(), 2);

        let block = render(&methods, &anchors);
        assert_eq!(
            block.text,
            "/**\n * Contents\n *\n * [First]\n *\n * [Second]\n * - a()\n * - b()\n */"
        );
    }
}
