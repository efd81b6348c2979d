use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    diagnostics::DiagnosticSink,
    error::ParseError,
    interpreter::{
        parser::{binary::parse_equality, statement::parse_statement},
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Statements are parsed until the end-of-file token. A statement with a
/// syntax error is reported to `sink` and dropped; the parser then skips to
/// the next statement boundary and keeps going, so every syntax error in the
/// input is reported in one pass.
///
/// # Parameters
/// - `tokens`: The scanner output, terminated by an EOF token.
/// - `sink`: Receives syntax errors.
///
/// # Returns
/// The statements that parsed cleanly, in source order.
///
/// # Example
/// ```
/// use treelox::{
///     diagnostics::{DiagnosticSink, Diagnostics},
///     interpreter::{lexer::Scanner, parser::core::parse_program},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = Scanner::new("print 1; 2 +; print 3;").scan_tokens(&mut diagnostics);
/// let statements = parse_program(&tokens, &mut diagnostics);
///
/// assert_eq!(statements.len(), 2);
/// assert!(diagnostics.had_error());
/// ```
pub fn parse_program(tokens: &[Token], sink: &mut impl DiagnosticSink) -> Vec<Statement> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some_and(|token| token.kind != TokenKind::Eof) {
        match parse_statement(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(e) => {
                sink.parse_error(&e);
                synchronize(&mut iter);
            },
        }
    }

    debug!(statements = statements.len(), "parsed program");
    statements
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, equality, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := equality`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_equality(tokens)
}

/// Skips tokens after a syntax error until a likely statement boundary.
///
/// The offending token is always discarded. Skipping stops just after a `;`,
/// or just before a keyword that starts a statement, or at end of input.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    let Some(mut previous) = tokens.next_if(|token| token.kind != TokenKind::Eof) else {
        return;
    };

    while previous.kind != TokenKind::Semicolon {
        let next = tokens.next_if(|token| {
                             token.kind != TokenKind::Eof && !token.kind.begins_statement()
                         });
        match next {
            Some(token) => previous = token,
            None => return,
        }
    }
}

/// Returns a copy of the next token without consuming it.
///
/// A stream that ran out without an EOF token yields a synthetic EOF.
pub(crate) fn peek_token<'a, I>(tokens: &mut Peekable<I>) -> Token
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .map_or_else(|| Token::eof(0), |token| (*token).clone())
}

/// Consumes the next token if it has the expected kind.
///
/// # Errors
/// Returns the error built by `error` from the unexpected token, which is
/// left in the stream.
pub(crate) fn consume<'a, I>(tokens: &mut Peekable<I>,
                             kind: TokenKind,
                             error: impl FnOnce(Token) -> ParseError)
                             -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|token| token.kind == kind) {
        Some(token) => Ok(token),
        None => Err(error(peek_token(tokens))),
    }
}
