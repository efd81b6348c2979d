use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_number_operand},
        token::Token,
        value::core::Value,
    },
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation. The operand must be a number.
/// - `Not`: logical negation of the operand's truthiness. Accepts any value.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `operator`: The operator token, for error reporting.
/// - `value`: The evaluated operand.
///
/// # Example
/// ```
/// use treelox::{
///     ast::UnaryOperator,
///     interpreter::{
///         evaluator::unary::eval_unary,
///         token::{Token, TokenKind},
///         value::core::Value,
///     },
/// };
///
/// let minus = Token::new(TokenKind::Minus, "-", None, 1);
/// let v = eval_unary(UnaryOperator::Negate, &minus, &Value::Number(5.0)).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// let bang = Token::new(TokenKind::Bang, "!", None, 1);
/// let v = eval_unary(UnaryOperator::Not, &bang, &Value::Nil).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// assert!(eval_unary(UnaryOperator::Negate, &minus, &Value::from("5")).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, operator: &Token, value: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => Ok(Value::Number(-check_number_operand(operator, value)?)),
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}
