use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::{eval_addition, eval_arithmetic},
                comparison::eval_comparison,
            },
            core::EvalResult,
        },
        token::Token,
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// Both operands are already evaluated, left before right. Equality accepts
/// any pair of values and never fails. Comparisons and `-`, `*`, `/` require
/// two numbers. `+` adds two numbers or concatenates two strings.
///
/// # Parameters
/// - `op`: The operator.
/// - `operator`: The operator token, for error reporting.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{
///         evaluator::binary::core::eval_binary,
///         token::{Token, TokenKind},
///         value::core::Value,
///     },
/// };
///
/// let plus = Token::new(TokenKind::Plus, "+", None, 1);
///
/// let sum = eval_binary(BinaryOperator::Add, &plus, 1.0.into(), 2.0.into());
/// assert_eq!(sum.unwrap(), Value::Number(3.0));
///
/// let text = eval_binary(BinaryOperator::Add, &plus, "1".into(), "2".into());
/// assert_eq!(text.unwrap(), Value::from("12"));
///
/// assert!(eval_binary(BinaryOperator::Add, &plus, 1.0.into(), "2".into()).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   operator: &Token,
                   left: Value,
                   right: Value)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Equal => Ok(Value::Bool(left == right)),
        NotEqual => Ok(Value::Bool(left != right)),

        Less => eval_comparison(operator, &left, &right, |a, b| a < b),
        LessEqual => eval_comparison(operator, &left, &right, |a, b| a <= b),
        Greater => eval_comparison(operator, &left, &right, |a, b| a > b),
        GreaterEqual => eval_comparison(operator, &left, &right, |a, b| a >= b),

        Add => eval_addition(operator, left, right),
        Sub => eval_arithmetic(operator, &left, &right, |a, b| a - b),
        Mul => eval_arithmetic(operator, &left, &right, |a, b| a * b),
        Div => eval_arithmetic(operator, &left, &right, |a, b| a / b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RuntimeError, interpreter::token::TokenKind};

    fn token(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, None, 4)
    }

    #[test]
    fn equality_over_mixed_values() {
        let eq = token(TokenKind::EqualEqual, "==");
        let ne = token(TokenKind::BangEqual, "!=");

        let cases = [(Value::Nil, Value::Nil, true),
                     (Value::Bool(false), Value::Nil, false),
                     (Value::Number(1.0), Value::from("1"), false),
                     (Value::Number(1.0), Value::Number(1.0), true),
                     (Value::from("a"), Value::from("a"), true),
                     (Value::Bool(true), Value::Bool(true), true)];

        for (left, right, expected) in cases {
            let equal = eval_binary(BinaryOperator::Equal, &eq, left.clone(), right.clone());
            assert_eq!(equal.unwrap(), Value::Bool(expected), "{left} == {right}");

            let not_equal = eval_binary(BinaryOperator::NotEqual, &ne, left.clone(), right.clone());
            assert_eq!(not_equal.unwrap(), Value::Bool(!expected), "{left} != {right}");
        }
    }

    #[test]
    fn comparisons_require_numbers() {
        let less = token(TokenKind::Less, "<");
        assert_eq!(eval_binary(BinaryOperator::Less, &less, 1.0.into(), 2.0.into()).unwrap(),
                   Value::Bool(true));

        let err = eval_binary(BinaryOperator::Less, &less, "a".into(), "b".into()).unwrap_err();
        assert_eq!(err, RuntimeError::OperandsMustBeNumbers { operator: less });
        assert_eq!(err.line(), 4);
        assert_eq!(err.to_string(), "Operands must be numbers.");
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let slash = token(TokenKind::Slash, "/");
        let result = eval_binary(BinaryOperator::Div, &slash, 5.0.into(), 0.0.into()).unwrap();
        assert_eq!(result, Value::Number(f64::INFINITY));

        let result = eval_binary(BinaryOperator::Div, &slash, 0.0.into(), 0.0.into()).unwrap();
        assert!(result.as_number().is_some_and(f64::is_nan));
    }

    #[test]
    fn addition_rejects_mixed_operands() {
        let plus = token(TokenKind::Plus, "+");
        let err = eval_binary(BinaryOperator::Add, &plus, "1".into(), 2.0.into()).unwrap_err();
        assert_eq!(err.to_string(), "Operands must be two numbers or to strings.");

        let err = eval_binary(BinaryOperator::Add, &plus, Value::Nil, Value::Nil).unwrap_err();
        assert_eq!(err, RuntimeError::OperandsMustBeNumbersOrStrings { operator: plus });
    }
}
