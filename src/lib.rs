//! # glsl-reflect
//!
//! A static reflection parser for a GLSL shader dialect. It scans shader
//! source for `struct` definitions and function definition headers, binds
//! `META` annotation blocks to struct members and function parameters,
//! tracks `#line` file attribution, and emits a JSON reflection document
//! describing everything it found.
//!
//! It never executes or type-checks shader code: function bodies and any
//! construct outside the declaration grammar are skipped, not rejected.

pub mod glsl;

pub use glsl::{parse_source, reflect, ReflectError};
