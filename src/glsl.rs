//! GLSL reflection pipeline
//!
//! The pipeline is linear: source text is tokenized, the token stream is
//! scanned for declarations, and the resulting tree is compiled into the
//! reflection document. [`reflect`] runs the whole thing; [`parse_source`]
//! stops at the tree for tooling that wants to inspect it.

pub mod lexer;
pub mod meta;
pub mod parser;
pub mod reflection;

use std::fmt;

use parser::{source_file, ParserError, TopLevel};
use reflection::ReflectionDocument;

use chumsky::Parser;

/// Errors from the reflection pipeline.
///
/// Only a failure of the top-level scan itself is an error, and the scan's
/// skip rule makes that essentially pathological: malformed declarations,
/// broken metadata blocks, and arbitrary shader code all degrade to "not
/// recognized" and are absent from the output instead.
#[derive(Debug)]
pub enum ReflectError {
    Parse(Vec<ParserError>),
}

impl fmt::Display for ReflectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectError::Parse(errors) => {
                write!(f, "top-level scan failed ({} errors)", errors.len())
            }
        }
    }
}

impl std::error::Error for ReflectError {}

/// Scan source text into a parse tree of recognized top-level constructs.
pub fn parse_source(source: &str) -> Result<Vec<TopLevel>, ReflectError> {
    let tokens = lexer::tokenize_with_spans(source);
    source_file().parse(tokens).map_err(ReflectError::Parse)
}

/// Run the full pipeline: tokenize, scan, compile.
pub fn reflect(source: &str) -> Result<ReflectionDocument, ReflectError> {
    let tree = parse_source(source)?;
    Ok(reflection::compile(source, &tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_empty_source() {
        let document = reflect("").unwrap();
        assert!(document.structs.is_empty());
        assert!(document.functions.is_empty());
    }

    #[test]
    fn test_reflect_end_to_end() {
        let document = reflect(
            "struct Light { vec3 position; float intensity; };\n\
             vec3 shade(in vec3 normal, out float att) { return normal; }",
        )
        .unwrap();
        assert_eq!(document.structs.len(), 1);
        assert_eq!(document.functions.len(), 1);
        assert_eq!(document.functions["shade"].ty, "vec3");
    }
}
