use std::collections::HashSet;
use std::fs;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{Class, ClassElement, Expression, PropertyDefinition, PropertyKey};
use oxc_ast_visit::{Visit, walk};
use tracing::debug;

use crate::comments::{
    CommentIndex, collect_block_comments, is_injected_block, is_section_marker, section_title,
};
use crate::error::{DocblockError, Result};
use crate::model::{Extraction, MethodEntry, SectionAnchor};
use crate::parser::{ParseOptions, parse};

/// Extract methods and section anchors from a file on disk.
pub fn extract_from_path(path: impl AsRef<Path>) -> Result<Extraction> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|error| DocblockError::io(path, error))?;
    extract(path, &source)
}

/// Extract methods and section anchors from an in-memory source string.
///
/// Only the first class declaration in source order is scanned. Comments that
/// are themselves injected blocks take no part in summary or section lookup.
pub fn extract(path: impl AsRef<Path>, source: &str) -> Result<Extraction> {
    let path = path.as_ref();
    let allocator = Allocator::default();
    let parsed = parse(&allocator, path, source, ParseOptions::from_path(path))?;

    let comments = collect_block_comments(&parsed.program, parsed.source_text)
        .into_iter()
        .filter(|comment| !is_injected_block(&comment.text))
        .collect();
    let index = CommentIndex::new(comments);

    let mut finder = FirstClassFinder::default();
    finder.visit_program(&parsed.program);

    let Some(class) = finder.class else {
        debug!(path = %path.display(), "no class declaration found");
        return Ok(Extraction::default());
    };

    let mut methods: Vec<MethodEntry> = class
        .members
        .into_iter()
        .map(|(name, position)| {
            let summary = index.summary_for(source, position);
            MethodEntry::new(name, position, summary)
        })
        .collect();
    methods.sort_by_key(|method| method.position);

    let anchors = section_anchors(&index, &methods);

    debug!(
        path = %path.display(),
        class = class.name.as_deref().unwrap_or("<anonymous>"),
        methods = methods.len(),
        sections = anchors.len(),
        "extracted class surface"
    );

    Ok(Extraction {
        class_name: class.name,
        methods,
        anchors,
    })
}

/// Resolve every `SECTION:` comment to the index of the first method after it.
fn section_anchors(index: &CommentIndex, methods: &[MethodEntry]) -> Vec<SectionAnchor> {
    let mut markers: Vec<_> = index
        .iter()
        .filter(|comment| is_section_marker(&comment.text))
        .collect();
    markers.sort_by_key(|comment| comment.start);

    let mut anchors = Vec::new();
    for marker in markers {
        let Some(title) = section_title(&marker.text) else {
            debug!(offset = marker.start, "ignoring section marker without a title");
            continue;
        };
        let anchor_index = methods.partition_point(|method| method.position <= marker.end);
        if anchor_index == methods.len() {
            debug!(%title, offset = marker.start, "dropping section marker with no following method");
            continue;
        }
        anchors.push(SectionAnchor::new(title, anchor_index));
    }

    anchors.sort_by_key(|anchor| anchor.anchor_index);
    anchors
}

/// Members of the scanned class as `(display name, start offset)` pairs.
#[derive(Debug, Default)]
struct ClassScan {
    name: Option<String>,
    members: Vec<(String, u32)>,
}

/// Visitor that records the first class declaration and ignores the rest.
#[derive(Debug, Default)]
struct FirstClassFinder {
    class: Option<ClassScan>,
}

impl<'a> Visit<'a> for FirstClassFinder {
    fn visit_class(&mut self, class: &Class<'a>) {
        if self.class.is_some() {
            return;
        }
        if class.is_declaration() {
            self.class = Some(scan_class(class));
            return;
        }
        walk::walk_class(self, class);
    }
}

/// TypeScript overload signatures and their implementation collapse into the
/// entry of the first signature.
fn scan_class(class: &Class<'_>) -> ClassScan {
    let mut members = Vec::new();
    let mut overloaded: HashSet<(String, bool)> = HashSet::new();

    for element in &class.body.body {
        match element {
            ClassElement::MethodDefinition(method) => {
                let Some(name) = member_name(&method.key) else {
                    continue;
                };
                let key = (name, method.r#static);
                if method.value.body.is_none() {
                    if overloaded.contains(&key) {
                        continue;
                    }
                    members.push((key.0.clone(), method.span.start));
                    overloaded.insert(key);
                } else if !overloaded.remove(&key) {
                    members.push((key.0, method.span.start));
                }
            }
            ClassElement::PropertyDefinition(property) if is_bound_method(property) => {
                if let Some(name) = member_name(&property.key) {
                    members.push((name, property.span.start));
                }
            }
            _ => {}
        }
    }

    ClassScan {
        name: class.id.as_ref().map(|id| id.name.to_string()),
        members,
    }
}

/// A field whose initializer is an anonymous function defines a method.
fn is_bound_method(property: &PropertyDefinition<'_>) -> bool {
    match property.value.as_ref().map(Expression::without_parentheses) {
        Some(Expression::ArrowFunctionExpression(_)) => true,
        Some(Expression::FunctionExpression(function)) => function.id.is_none(),
        _ => false,
    }
}

/// Display name of a member key; computed and numeric keys have none.
fn member_name(key: &PropertyKey<'_>) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.to_string()),
        PropertyKey::PrivateIdentifier(ident) => Some(ident.name.to_string()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.to_string()),
        _ => None,
    }
}
