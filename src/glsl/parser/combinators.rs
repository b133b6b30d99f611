//! Parser combinators for the declaration grammar
//!
//! The parsers operate on `(Token, Range)` pairs so byte spans survive into
//! the tree; the reflection stage needs them to slice raw signature text.
//!
//! The top-level scan tries, in priority order: line marker, struct
//! definition, function definition. When none match it consumes a single
//! token and retries. That skip rule is what makes the scan total: function
//! bodies, global variables, macro residue, and malformed near-misses (a
//! struct missing its closing brace, a prototype without a body) are
//! consumed silently instead of producing errors. A reflection pass must
//! never abort a whole shader build over one broken annotation.

use chumsky::prelude::*;
use std::ops::Range;

use crate::glsl::lexer::Token;
use crate::glsl::meta::{self, MetaMap};
use crate::glsl::parser::ast::{
    FunctionDecl, IoQualifier, MemberDecl, ParameterDecl, StructDef, TopLevel,
};

/// Token with its byte span in the source
pub type TokenSpan = (Token, Range<usize>);

/// Parser error type used throughout the grammar
pub type ParserError = Simple<TokenSpan>;

/// Match one specific token, yielding its byte span
fn just_token(token: Token) -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    filter(move |(t, _): &TokenSpan| t == &token).map(|(_, span)| span)
}

/// Match any identifier, yielding its text and byte span
fn identifier() -> impl Parser<TokenSpan, (String, Range<usize>), Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenSpan| match token {
        Token::Identifier(name) => Ok((name, range)),
        token => Err(Simple::expected_input_found(
            span,
            Vec::new(),
            Some((token, range)),
        )),
    })
}

/// Match a precision qualifier (accepted, never recorded)
fn precision() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| matches!(t, Token::Precision)).ignored()
}

/// Match a direction qualifier
fn io_qualifier() -> impl Parser<TokenSpan, IoQualifier, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenSpan| match token {
        Token::In => Ok(IoQualifier::In),
        Token::Out => Ok(IoQualifier::Out),
        Token::InOut => Ok(IoQualifier::InOut),
        token => Err(Simple::expected_input_found(
            span,
            Vec::new(),
            Some((token, range)),
        )),
    })
}

/// Match a bracketed array-size suffix: `[ <digits> ]`
///
/// The lexer guarantees the digits token holds only digit characters; a
/// count too large for u32 degrades to 0 rather than failing the match.
fn array_size() -> impl Parser<TokenSpan, u32, Error = ParserError> + Clone {
    let digits = filter_map(|span, (token, range): TokenSpan| match token {
        Token::Digits(text) => Ok(text.parse::<u32>().unwrap_or(0)),
        token => Err(Simple::expected_input_found(
            span,
            Vec::new(),
            Some((token, range)),
        )),
    });

    just_token(Token::OpenBracket)
        .ignore_then(digits)
        .then_ignore(just_token(Token::CloseBracket))
}

/// Match a metadata block token and parse its interior.
///
/// Malformed interiors come back as an empty map, so a broken annotation
/// never fails the declaration it sits above.
fn meta_block() -> impl Parser<TokenSpan, MetaMap, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenSpan| match token {
        Token::MetaBlock(body) => Ok(meta::parse_meta_block(&body)),
        token => Err(Simple::expected_input_found(
            span,
            Vec::new(),
            Some((token, range)),
        )),
    })
}

/// Struct member: `[precision] <type> <name> [\[N\]] ;`
fn member_decl() -> impl Parser<TokenSpan, MemberDecl, Error = ParserError> + Clone {
    precision()
        .or_not()
        .ignore_then(identifier())
        .then(identifier())
        .then(array_size().or_not())
        .then_ignore(just_token(Token::Semicolon))
        .map(|(((ty, _), (name, _)), size)| MemberDecl {
            ty,
            name,
            array_size: size.unwrap_or(0),
        })
}

/// Struct definition: `[meta] struct <name> { <member>+ }`
fn struct_def() -> impl Parser<TokenSpan, StructDef, Error = ParserError> + Clone {
    meta_block()
        .or_not()
        .then_ignore(just_token(Token::Struct))
        .then(identifier())
        .then_ignore(just_token(Token::OpenBrace))
        .then(member_decl().repeated().at_least(1))
        .then_ignore(just_token(Token::CloseBrace))
        .map(|((meta, (name, _)), members)| StructDef {
            meta: meta.unwrap_or_default(),
            name,
            members,
        })
}

/// Function parameter: `[in|out|inout] [precision] <type> <name> [\[N\]]`
fn parameter_decl() -> impl Parser<TokenSpan, ParameterDecl, Error = ParserError> + Clone {
    io_qualifier()
        .or_not()
        .then_ignore(precision().or_not())
        .then(identifier())
        .then(identifier())
        .then(array_size().or_not())
        .map(|(((io, (ty, _)), (name, _)), size)| ParameterDecl {
            io,
            ty,
            name,
            array_size: size.unwrap_or(0),
        })
}

/// Function definition header: `[meta] <type> <name> ( <params> ) {`
///
/// The opening brace is what commits this to being a definition; a
/// prototype's `;` fails the match and the tokens fall through to the
/// skip rule. The brace itself is consumed, the body is not: body tokens
/// are skipped one at a time by the top-level scan, exactly like any
/// other unrecognized text.
fn function_decl() -> impl Parser<TokenSpan, FunctionDecl, Error = ParserError> + Clone {
    meta_block()
        .or_not()
        .then(identifier())
        .then(identifier())
        .then_ignore(just_token(Token::OpenParen))
        .then(parameter_decl().separated_by(just_token(Token::Comma)))
        .then(just_token(Token::CloseParen))
        .then_ignore(just_token(Token::OpenBrace))
        .map(
            |((((meta, (return_type, type_span)), (name, _)), parameters), close_paren)| {
                FunctionDecl {
                    meta: meta.unwrap_or_default(),
                    return_type,
                    name,
                    parameters,
                    signature_span: type_span.start..close_paren.end,
                }
            },
        )
}

/// Line marker: a single captured `#line` token
fn line_marker() -> impl Parser<TokenSpan, TopLevel, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenSpan| match token {
        Token::LineMarker(path) => Ok(TopLevel::LineMarker(path)),
        token => Err(Simple::expected_input_found(
            span,
            Vec::new(),
            Some((token, range)),
        )),
    })
}

/// The whole-file scan. Always succeeds on any token stream; the output
/// contains only the recognized constructs, in source order.
pub fn source_file() -> impl Parser<TokenSpan, Vec<TopLevel>, Error = ParserError> {
    choice((
        line_marker().map(Some),
        struct_def().map(|def| Some(TopLevel::Struct(def))),
        function_decl().map(|decl| Some(TopLevel::Function(decl))),
        any().map(|_| None),
    ))
    .repeated()
    .then_ignore(end())
    .map(|nodes| nodes.into_iter().flatten().collect())
}
