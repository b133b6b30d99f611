//! Parse tree for the shader dialect
//!
//! The tree is a set of tagged variants inspected by exhaustive `match`:
//! every consumer is forced to handle every node kind, and there is no
//! runtime kind query or downcast anywhere. Only the top-level scan
//! produces nodes; function bodies, globals, and everything else the
//! grammar does not recognize never enter the tree.

use crate::glsl::meta::MetaMap;
use std::fmt;
use std::ops::Range;

/// One recognized top-level construct, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    /// A `#line` directive with a quoted path: updates file attribution for
    /// every declaration that follows.
    LineMarker(String),
    Struct(StructDef),
    Function(FunctionDecl),
}

/// A struct definition: `struct Name { members }`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    /// Parsed metadata from the block directly above the definition.
    /// Empty when there was no block or its content was malformed.
    pub meta: MetaMap,
    pub name: String,
    pub members: Vec<MemberDecl>,
}

/// A single struct member. Precision qualifiers are consumed by the grammar
/// but not recorded; reflection does not need them.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDecl {
    pub ty: String,
    pub name: String,
    /// 0 means "not an array".
    pub array_size: u32,
}

/// A function definition header: signature followed by an opening brace.
/// Prototypes (signature followed by `;`) are not recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub meta: MetaMap,
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<ParameterDecl>,
    /// Byte range of the signature in the source, from the first character
    /// of the return type through the closing parenthesis. Used to slice
    /// the raw signature text for canonicalization.
    pub signature_span: Range<usize>,
}

/// A single function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDecl {
    /// None when the source omitted a direction keyword; reflection
    /// defaults that to "in".
    pub io: Option<IoQualifier>,
    pub ty: String,
    pub name: String,
    pub array_size: u32,
}

/// Parameter direction qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoQualifier {
    In,
    Out,
    InOut,
}

impl fmt::Display for IoQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoQualifier::In => write!(f, "in"),
            IoQualifier::Out => write!(f, "out"),
            IoQualifier::InOut => write!(f, "inout"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_qualifier_display() {
        assert_eq!(IoQualifier::In.to_string(), "in");
        assert_eq!(IoQualifier::Out.to_string(), "out");
        assert_eq!(IoQualifier::InOut.to_string(), "inout");
    }
}
