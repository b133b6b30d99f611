//! Declaration parser for the shader dialect
//!
//! Recognizes struct definitions and function definition headers out of a
//! token stream, skipping everything else one token at a time. The output
//! is the tagged-variant tree in [`ast`].

pub mod ast;
pub mod combinators;

pub use ast::{FunctionDecl, IoQualifier, MemberDecl, ParameterDecl, StructDef, TopLevel};
pub use combinators::{source_file, ParserError, TokenSpan};
