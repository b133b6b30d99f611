//! Reflection document assembly
//!
//! Turns a parse tree into the JSON-serializable reflection document:
//! file attribution, metadata binding, and overload key resolution all
//! happen here, in one pass over the tree.

pub mod compiler;
pub mod document;

pub use compiler::{canonicalize_signature, compile};
pub use document::{
    FunctionEntry, MemberEntry, ParameterEntry, ReflectionDocument, StructEntry,
};
