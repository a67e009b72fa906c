//! Parser façade for reading JavaScript/TypeScript sources with OXC.
//!
//! Every parser diagnostic is treated as fatal: callers either get a complete
//! program or a [`DocblockError::Parse`] naming the file.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{DocblockError, Result};

/// Parse options for reading source code
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::mjs().with_jsx(true),
        }
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type).
    ///
    /// Plain JavaScript always gets JSX enabled; unknown extensions fall back
    /// to an ES module with JSX.
    pub fn from_path(path: &Path) -> Self {
        let source_type = match SourceType::from_path(path) {
            Ok(source_type) if source_type.is_typescript() => source_type,
            Ok(source_type) => source_type.with_jsx(true),
            Err(_) => SourceType::mjs().with_jsx(true),
        };
        Self { source_type }
    }
}

/// Parsed program with the original source text.
pub struct ParsedProgram<'a> {
    /// The parsed AST program
    pub program: Program<'a>,
    /// Original source text
    pub source_text: &'a str,
}

/// Parse source code into an AST, failing on any diagnostic.
pub fn parse<'a>(
    allocator: &'a Allocator,
    path: &Path,
    source: &'a str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    if result.panicked || !result.errors.is_empty() {
        let mut diagnostics: Vec<String> =
            result.errors.iter().map(|err| err.to_string()).collect();
        if diagnostics.is_empty() {
            diagnostics.push("parser aborted".to_string());
        }
        return Err(DocblockError::parse_error(path.to_path_buf(), &diagnostics));
    }

    Ok(ParsedProgram {
        program: result.program,
        source_text: source,
    })
}
