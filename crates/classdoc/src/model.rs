use serde::{Deserialize, Serialize};

/// A block comment found anywhere in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentBlock {
    /// Byte offset of the opening `/*`.
    pub start: u32,
    /// Byte offset just past the closing `*/`.
    pub end: u32,
    /// Comment body without the `/*` and `*/` delimiters.
    pub text: String,
}

impl CommentBlock {
    /// Creates a comment record from its span and body.
    pub fn new(start: u32, end: u32, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// A documented member of the scanned class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
    /// Display name, without the `#` privacy marker.
    pub name: String,
    /// Start offset of the member node in the original source.
    pub position: u32,
    /// One-line summary from the adjacent doc comment, or empty.
    pub summary: String,
}

impl MethodEntry {
    /// Creates a method entry.
    pub fn new(name: impl Into<String>, position: u32, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position,
            summary: summary.into(),
        }
    }
}

/// A titled section starting at `anchor_index` in the ordered method list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAnchor {
    /// Section title taken from the `SECTION:` marker.
    pub title: String,
    /// Index of the first method following the marker.
    pub anchor_index: usize,
}

impl SectionAnchor {
    /// Creates a section anchor.
    pub fn new(title: impl Into<String>, anchor_index: usize) -> Self {
        Self {
            title: title.into(),
            anchor_index,
        }
    }
}

/// Everything the extractor learned about one file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Name of the documented class, when a named class declaration was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Members sorted by source position.
    pub methods: Vec<MethodEntry>,
    /// Section anchors sorted by anchor index.
    pub anchors: Vec<SectionAnchor>,
}

impl Extraction {
    /// Returns `true` when no method was extracted.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Rendering shape of an injected block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockMode {
    /// Flat list of every method.
    Methods,
    /// Methods grouped under section titles.
    Contents,
}

/// The rendered comment injected at the top of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocBlock {
    /// Which of the two shapes was rendered.
    pub mode: BlockMode,
    /// Full comment text, from `/**` through `*/`, without a trailing newline.
    pub text: String,
}

impl DocBlock {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for DocBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
