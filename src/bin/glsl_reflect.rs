//! Command-line interface for glsl-reflect
//!
//! Usage:
//!   glsl-reflect `<path>`  - Parse a shader source file and print its JSON
//!                            reflection document to stdout
//!
//! The input is expected to be preprocessor output: one flattened stream
//! with `#line` markers at the original file boundaries. Exit status is
//! non-zero when the path is missing, the file cannot be read, or the
//! top-level scan produces no tree.

use clap::{Arg, Command};

fn main() {
    let matches = Command::new("glsl-reflect")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Emits a JSON reflection document for a GLSL shader source file")
        .arg(
            Arg::new("path")
                .help("Path to the shader source file")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let document = glsl_reflect::reflect(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
        eprintln!("Error serializing document: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}
