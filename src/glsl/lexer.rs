//! Lexer for the shader dialect
//!
//! Tokenization carries more weight here than in a typical language
//! front-end: comment and preprocessor handling lives entirely in this
//! layer, so the declaration grammar operates on a trivia-free token
//! stream. See [`tokens`] for the full rule set.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::Token;
