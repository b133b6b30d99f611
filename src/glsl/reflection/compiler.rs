//! Tree-to-document compilation
//!
//! A single pass over the parse tree in source order. File attribution is an
//! explicit accumulator threaded through the walk: each line marker replaces
//! the current path, and every declaration stamps the value in effect at its
//! own position. There is no ambient state anywhere in the pass.
//!
//! Struct entries insert by name, last write wins. Function keys resolve
//! collisions through the canonical signature: the first declaration of a
//! name keeps the bare key, later ones get `"<name> - <signature>"`. Two
//! byte-identical overload signatures therefore collide on the composite key
//! too and the later one replaces the earlier — a degenerate input the
//! format accepts rather than diagnoses.

use crate::glsl::parser::ast::{FunctionDecl, IoQualifier, StructDef, TopLevel};
use crate::glsl::reflection::document::{
    FunctionEntry, MemberEntry, ParameterEntry, ReflectionDocument, StructEntry,
};

/// Compile a parse tree into the reflection document.
///
/// `source` must be the text the tree was parsed from; signature spans are
/// resolved against it.
pub fn compile(source: &str, tree: &[TopLevel]) -> ReflectionDocument {
    let mut document = ReflectionDocument::default();
    let mut current_file = String::new();

    for node in tree {
        match node {
            TopLevel::LineMarker(path) => current_file = path.clone(),
            TopLevel::Struct(def) => {
                document
                    .structs
                    .insert(def.name.clone(), compile_struct(def, &current_file));
            }
            TopLevel::Function(decl) => {
                let signature =
                    canonicalize_signature(&source[decl.signature_span.clone()]);
                let key = if document.functions.contains_key(&decl.name) {
                    format!("{} - {}", decl.name, signature)
                } else {
                    decl.name.clone()
                };
                document
                    .functions
                    .insert(key, compile_function(decl, signature, &current_file));
            }
        }
    }

    document
}

fn compile_struct(def: &StructDef, file: &str) -> StructEntry {
    StructEntry {
        name: def.name.clone(),
        file: file.to_string(),
        members: def
            .members
            .iter()
            .map(|member| MemberEntry {
                name: member.name.clone(),
                ty: member.ty.clone(),
                size: member.array_size,
                // Sections naming no member are silently unused; members
                // with no section get an empty map.
                meta: def.meta.get(&member.name).cloned().unwrap_or_default(),
            })
            .collect(),
    }
}

fn compile_function(decl: &FunctionDecl, signature: String, file: &str) -> FunctionEntry {
    FunctionEntry {
        name: decl.name.clone(),
        ty: decl.return_type.clone(),
        file: file.to_string(),
        signature,
        parameters: decl
            .parameters
            .iter()
            .map(|parameter| ParameterEntry {
                name: parameter.name.clone(),
                ty: parameter.ty.clone(),
                size: parameter.array_size,
                io: parameter.io.unwrap_or(IoQualifier::In).to_string(),
                meta: decl.meta.get(&parameter.name).cloned().unwrap_or_default(),
            })
            .collect(),
    }
}

/// Normalize raw signature text for use in composite function keys.
///
/// Comments are removed and every run of whitespace (or comments) collapses
/// to a single space; the result carries no leading or trailing space. The
/// operation is idempotent, so canonical text survives re-canonicalization
/// unchanged.
pub fn canonicalize_signature(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut pending_space = false;
    let mut rest = raw;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("//") {
            rest = match after.find('\n') {
                Some(newline) => &after[newline..],
                None => "",
            };
            pending_space = true;
        } else if let Some(after) = rest.strip_prefix("/*") {
            rest = match after.find("*/") {
                Some(close) => &after[close + 2..],
                None => "",
            };
            pending_space = true;
        } else if let Some(c) = rest.chars().next() {
            if c.is_whitespace() {
                pending_space = true;
            } else {
                if pending_space && !result.is_empty() {
                    result.push(' ');
                }
                pending_space = false;
                result.push(c);
            }
            rest = &rest[c.len_utf8()..];
        } else {
            break;
        }
    }

    result
}
