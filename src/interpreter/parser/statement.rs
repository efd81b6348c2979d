use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, consume, parse_expression},
        token::{Token, TokenKind},
    },
};

/// Parses a single statement.
///
/// A statement is either `print <expression>;` or `<expression>;`.
///
/// # Errors
/// Propagates expression errors and reports a missing `;`.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if tokens.next_if(|token| token.kind == TokenKind::Print)
             .is_some()
    {
        return parse_print_statement(tokens);
    }

    parse_expression_statement(tokens)
}

/// Parses the remainder of a print statement, after the `print` keyword.
fn parse_print_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;
    consume(tokens, TokenKind::Semicolon, |token| {
        ParseError::ExpectedSemicolonAfterValue { token }
    })?;

    Ok(Statement::Print { expr })
}

fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;
    consume(tokens, TokenKind::Semicolon, |token| {
        ParseError::ExpectedSemicolonAfterExpression { token }
    })?;

    Ok(Statement::Expression { expr })
}
