//! Metadata-block grammar
//!
//! A metadata block is the interior of a `META` comment. It contains one or
//! more sections, each introduced by a target marker naming the struct member
//! or function parameter it annotates, followed by property statements:
//!
//! ```glsl
//! /* META
//!     @color: default = vec4(1); subtype = Color;
//!     @size: default = 1.0; min = 0.0;
//! */
//! ```
//!
//! Property values are raw text: everything between `=` and the next `;`,
//! trimmed. Values therefore cannot contain a semicolon and there is no
//! escaping mechanism. Sections are scanned in document order; a later
//! section for the same target replaces the earlier one, as does a repeated
//! property key within a section.
//!
//! A block that matches nothing of this shape produces an empty map. The
//! caller treats that as "no metadata" — a malformed annotation never stops
//! the surrounding declaration from parsing.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Properties attached to a single target: property name to raw value text.
pub type MetaProperties = IndexMap<String, String>;

/// A whole metadata block: target name to its properties.
pub type MetaMap = IndexMap<String, MetaProperties>;

/// Section marker: `@target :`
static SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([A-Za-z_][A-Za-z0-9_]*)\s*:").expect("section pattern"));

/// Property statement: `key = value ;` with the value running to the `;`
static PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*=\s*([^;]*);").expect("property pattern"));

/// Parse the interior of a metadata block into target-keyed property maps.
pub fn parse_meta_block(body: &str) -> MetaMap {
    // (target name, content start, marker start) for each section marker,
    // in document order. Each section's content runs to the next marker.
    let markers: Vec<(String, usize, usize)> = SECTION
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some((name.as_str().to_string(), whole.end(), whole.start()))
        })
        .collect();

    let mut sections = MetaMap::new();
    for (index, (name, content_start, _)) in markers.iter().enumerate() {
        let content_end = markers
            .get(index + 1)
            .map(|(_, _, next_marker)| *next_marker)
            .unwrap_or(body.len());
        let content = &body[*content_start..content_end];

        let mut properties = MetaProperties::new();
        for caps in PROPERTY.captures_iter(content) {
            if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
                properties.insert(key.as_str().to_string(), value.as_str().trim().to_string());
            }
        }
        sections.insert(name.clone(), properties);
    }
    sections
}
