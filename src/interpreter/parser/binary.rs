use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::{core::ParseResult, unary::parse_unary},
        token::Token,
    },
};

/// Parses one left-associative precedence level.
///
/// Reads an operand with `operand`, then folds every following operator
/// listed in `accepts` together with its right operand into a left-leaning
/// `Expr::Binary` chain.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 accepts: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens)?;

    while let Some(token) = tokens.peek()
          && let Some(op) = BinaryOperator::from_kind(token.kind)
          && accepts.contains(&op)
    {
        let operator = (*token).clone();
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              operator,
                              right: Box::new(right) };
    }

    Ok(left)
}

/// Parses equality expressions.
///
/// The rule is: `equality := comparison (("!=" | "==") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           parse_comparison,
                           &[BinaryOperator::NotEqual, BinaryOperator::Equal])
}

/// Parses relational expressions.
///
/// The rule is: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           parse_term,
                           &[BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual,
                             BinaryOperator::Less,
                             BinaryOperator::LessEqual])
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `term := factor (("-" | "+") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, parse_factor, &[BinaryOperator::Sub, BinaryOperator::Add])
}

/// Parses multiplication and division expressions.
///
/// The rule is: `factor := unary (("/" | "*") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, parse_unary, &[BinaryOperator::Div, BinaryOperator::Mul])
}
