use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, consume, parse_expression, peek_token},
        token::{Token, TokenKind},
        value::core::Value,
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.peek()
       && let Some(op) = UnaryOperator::from_kind(token.kind)
    {
        let operator = (*token).clone();
        tokens.next();
        let right = parse_unary(tokens)?;
        return Ok(Expr::Unary { op,
                                operator,
                                right: Box::new(right) });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | "true" | "false" | "nill"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// `ExpectedExpression` when the next token cannot start an expression. The
/// token is not consumed.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = peek_token(tokens);

    let value = match token.kind {
        TokenKind::False => Value::Bool(false),
        TokenKind::True => Value::Bool(true),
        TokenKind::Nil => Value::Nil,
        TokenKind::Number | TokenKind::String => {
            token.literal
                 .clone()
                 .ok_or_else(|| ParseError::ExpectedExpression { token: token.clone() })?
        },
        TokenKind::LeftParen => return parse_grouping(tokens),
        _ => return Err(ParseError::ExpectedExpression { token }),
    };

    tokens.next();
    Ok(Expr::Literal { value })
}

/// Parses a parenthesized expression.
///
/// Parentheses only affect grouping; the result wraps the inner expression
/// in `Expr::Grouping`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    consume(tokens, TokenKind::LeftParen, |token| {
        ParseError::ExpectedExpression { token }
    })?;
    let expression = parse_expression(tokens)?;
    consume(tokens, TokenKind::RightParen, |token| {
        ParseError::ExpectedClosingParen { token }
    })?;

    Ok(Expr::Grouping { expression: Box::new(expression) })
}
