//! Token definitions for the shader dialect
//!
//! This module defines all the tokens produced by the lexer, using the logos
//! derive macro for efficient tokenization. The lexer does more than split
//! characters: everything the grammar treats as insignificant (whitespace,
//! line comments, ordinary block comments, ordinary preprocessor lines) is
//! discarded here, so the parser never sees trivia. Two constructs that look
//! like trivia are significant and are captured as tokens instead:
//!
//! - A block comment whose first word is the `META` tag carries a metadata
//!   block for the declaration that follows it. The interior after the tag is
//!   emitted as [`Token::MetaBlock`].
//! - A `#line <number> "<path>"` directive records which original file the
//!   following text came from. The quoted path is emitted as
//!   [`Token::LineMarker`]. Every other `#` line is skipped.
//!
//! Characters that match no rule at all (operators, literals, and other
//! executable-code syntax inside function bodies) produce lexer errors, which
//! the tokenize entry points drop. Combined with the parser's one-token skip
//! rule this gives the scan its any-character fallback: unrecognized source
//! never aborts the scan.

use logos::{Filter, Logos};
use once_cell::sync::Lazy;
use regex::Regex;

/// Quoted-path line directive, e.g. `#line 42 "node_utils.glsl"`.
///
/// Preprocessor output emits the whole directive on one line, so the pattern
/// only has to match within the line captured by the `#` rule. The unquoted
/// form some drivers emit (`#line 1 1`) carries no path and is skipped.
static LINE_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^#line\s+[0-9]+\s+"([^"]+)""#).expect("line directive pattern"));

/// All possible tokens in the shader dialect
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // Keywords
    #[token("struct")]
    Struct,
    #[token("in")]
    In,
    #[token("out")]
    Out,
    #[token("inout")]
    InOut,

    // Precision qualifiers are accepted so declarations using them still
    // parse, but reflection does not distinguish them, so one token covers
    // all three.
    #[token("lowp")]
    #[token("mediump")]
    #[token("highp")]
    Precision,

    // Punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // Identifiers and numbers. Keywords win over the identifier regex only
    // on exact length ("in" vs "int"), which is the longest-match behavior
    // the grammar expects.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Digits(String),

    // Captured trivia, see the module docs.
    #[token("/*", lex_block_comment)]
    MetaBlock(String),
    #[regex(r"#[^\n]*", lex_hash_line)]
    LineMarker(String),
}

/// Consume a block comment and decide whether it is a metadata block.
///
/// An unterminated comment does not consume anything beyond the opening
/// marker: the `/` and `*` are dropped and lexing continues, so text after an
/// unclosed comment still reaches the parser. This mirrors the fallback
/// behavior for every other malformed construct.
fn lex_block_comment(lex: &mut logos::Lexer<Token>) -> Filter<String> {
    let remainder = lex.remainder();
    match remainder.find("*/") {
        Some(close) => {
            let interior = &remainder[..close];
            lex.bump(close + 2);
            match meta_tag_interior(interior) {
                Some(body) => Filter::Emit(body.to_string()),
                None => Filter::Skip,
            }
        }
        None => Filter::Skip,
    }
}

/// Return the metadata body if the comment interior opens with the `META` tag.
///
/// The tag must be a full word: `METADATA` is an ordinary comment.
fn meta_tag_interior(interior: &str) -> Option<&str> {
    let rest = interior.trim_start().strip_prefix("META")?;
    match rest.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => None,
        _ => Some(rest),
    }
}

/// Classify a `#` line: emit the path of a quoted line directive, skip
/// everything else.
fn lex_hash_line(lex: &mut logos::Lexer<Token>) -> Filter<String> {
    match LINE_DIRECTIVE.captures(lex.slice()) {
        Some(caps) => match caps.get(1) {
            Some(path) => Filter::Emit(path.as_str().to_string()),
            None => Filter::Skip,
        },
        None => Filter::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glsl::lexer::tokenize;

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = tokenize("struct in out inout int inouter");
        assert_eq!(
            tokens,
            vec![
                Token::Struct,
                Token::In,
                Token::Out,
                Token::InOut,
                Token::Identifier("int".to_string()),
                Token::Identifier("inouter".to_string()),
            ]
        );
    }

    #[test]
    fn test_precision_qualifiers_collapse() {
        let tokens = tokenize("lowp mediump highp");
        assert_eq!(
            tokens,
            vec![Token::Precision, Token::Precision, Token::Precision]
        );
    }

    #[test]
    fn test_line_comment_skipped() {
        let tokens = tokenize("vec3 // position of the light\nposition");
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("vec3".to_string()),
                Token::Identifier("position".to_string()),
            ]
        );
    }

    #[test]
    fn test_plain_block_comment_skipped() {
        let tokens = tokenize("a /* not meta\nspanning lines */ b");
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("a".to_string()),
                Token::Identifier("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_meta_block_captured() {
        let tokens = tokenize("/* META @x: default = 1.0; */ struct");
        assert_eq!(
            tokens,
            vec![
                Token::MetaBlock(" @x: default = 1.0; ".to_string()),
                Token::Struct,
            ]
        );
    }

    #[test]
    fn test_meta_tag_must_be_full_word() {
        let tokens = tokenize("/* METADATA is just a comment */ x");
        assert_eq!(tokens, vec![Token::Identifier("x".to_string())]);
    }

    #[test]
    fn test_unterminated_comment_does_not_swallow_input() {
        let tokens = tokenize("/* unterminated\nstruct");
        assert_eq!(
            tokens,
            vec![Token::Identifier("unterminated".to_string()), Token::Struct]
        );
    }

    #[test]
    fn test_line_marker_captured() {
        let tokens = tokenize("#line 12 \"a.glsl\"\nvec3");
        assert_eq!(
            tokens,
            vec![
                Token::LineMarker("a.glsl".to_string()),
                Token::Identifier("vec3".to_string()),
            ]
        );
    }

    #[test]
    fn test_other_directives_skipped() {
        let tokens = tokenize("#version 410\n#line 1 1\n#define FOO 1\nvec3");
        assert_eq!(tokens, vec![Token::Identifier("vec3".to_string())]);
    }

    #[test]
    fn test_unknown_characters_dropped() {
        let tokens = tokenize("a = b * 2.5 + c.xyz;");
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("a".to_string()),
                Token::Identifier("b".to_string()),
                Token::Digits("2".to_string()),
                Token::Digits("5".to_string()),
                Token::Identifier("c".to_string()),
                Token::Identifier("xyz".to_string()),
                Token::Semicolon,
            ]
        );
    }
}
