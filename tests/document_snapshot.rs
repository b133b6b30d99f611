//! Snapshot tests for the serialized reflection document
//!
//! These pin the exact JSON text the CLI emits, field order included.
//! Downstream consumers parse this by shape, so any drift here is a
//! breaking change.

use glsl_reflect::reflect;

fn reflect_to_pretty_json(source: &str) -> String {
    let document = reflect(source).expect("scan is total");
    serde_json::to_string_pretty(&document).expect("document serializes")
}

#[test]
fn struct_document_snapshot() {
    let output = reflect_to_pretty_json("struct S { float x[4]; };");
    insta::assert_snapshot!(output, @r#"
{
  "structs": {
    "S": {
      "name": "S",
      "file": "",
      "members": [
        {
          "name": "x",
          "type": "float",
          "size": 4,
          "meta": {}
        }
      ]
    }
  },
  "functions": {}
}
"#);
}

#[test]
fn function_document_snapshot() {
    let output = reflect_to_pretty_json("float attenuate(float d) { return 1.0 / d; }");
    insta::assert_snapshot!(output, @r#"
{
  "structs": {},
  "functions": {
    "attenuate": {
      "name": "attenuate",
      "type": "float",
      "file": "",
      "signature": "float attenuate(float d)",
      "parameters": [
        {
          "name": "d",
          "type": "float",
          "size": 0,
          "io": "in",
          "meta": {}
        }
      ]
    }
  }
}
"#);
}
