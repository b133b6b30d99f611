//! Implementation of the shader lexer
//!
//! This module provides convenience functions for tokenizing shader text.
//! The actual tokenization is handled entirely by logos. Lexer errors
//! (characters with no token rule) are dropped rather than reported: the
//! grammar only ever has to skip them, so they never need to reach the
//! parser.

use crate::glsl::lexer::tokens::Token;
use logos::Logos;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Tokenize a string and collect tokens with their byte spans
///
/// The spans are needed downstream to slice raw signature text out of the
/// source when building the reflection document.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
