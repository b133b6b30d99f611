//! Reflection document model
//!
//! This is the serialization contract of the tool: shader composition,
//! uniform binding, and material UI generation all key into this document,
//! so the shape and field order are fixed. Maps are insertion-ordered so
//! the JSON output follows source order, and fields serialize in a stable
//! order: name, type, file, then per-declaration detail, metadata last.

use indexmap::IndexMap;
use serde::Serialize;

use crate::glsl::meta::MetaProperties;

/// The whole reflection output: structs and functions keyed as described in
/// their entry types.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReflectionDocument {
    pub structs: IndexMap<String, StructEntry>,
    pub functions: IndexMap<String, FunctionEntry>,
}

/// One struct, keyed by name. A later re-declaration of the same name
/// replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructEntry {
    pub name: String,
    /// Path from the last `#line` marker seen before this declaration;
    /// empty when no marker preceded it.
    pub file: String,
    pub members: Vec<MemberEntry>,
}

/// One struct member, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Array element count; 0 means "not an array".
    pub size: u32,
    pub meta: MetaProperties,
}

/// One function. Keyed by bare name, or by `"<name> - <signature>"` when the
/// bare name was already taken by an earlier overload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub file: String,
    /// Canonicalized signature text: comments stripped, whitespace runs
    /// collapsed to single spaces.
    pub signature: String,
    pub parameters: Vec<ParameterEntry>,
}

/// One function parameter, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub size: u32,
    /// "in", "out", or "inout"; "in" when the source omitted the qualifier.
    pub io: String,
    pub meta: MetaProperties,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_field_order_and_type_rename() {
        let member = MemberEntry {
            name: "position".to_string(),
            ty: "vec3".to_string(),
            size: 0,
            meta: MetaProperties::new(),
        };
        let json = serde_json::to_string(&member).unwrap();
        assert_eq!(
            json,
            r#"{"name":"position","type":"vec3","size":0,"meta":{}}"#
        );
    }

    #[test]
    fn test_empty_document_shape() {
        let document = ReflectionDocument::default();
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(json, r#"{"structs":{},"functions":{}}"#);
    }
}
