use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_number_operands},
        token::Token,
        value::core::Value,
    },
};

/// Evaluates `-`, `*` or `/` on two numbers.
///
/// Division by zero is not an error: it yields an infinity or `NaN` as
/// IEEE-754 prescribes.
///
/// # Errors
/// `OperandsMustBeNumbers` if either operand is not a number.
pub fn eval_arithmetic(operator: &Token,
                       left: &Value,
                       right: &Value,
                       apply: fn(f64, f64) -> f64)
                       -> EvalResult<Value> {
    let (left, right) = check_number_operands(operator, left, right)?;
    Ok(Value::Number(apply(left, right)))
}

/// Evaluates `+`.
///
/// Two numbers are added and two strings are concatenated. No other pairing
/// is accepted; in particular a number is never converted to a string.
///
/// # Errors
/// `OperandsMustBeNumbersOrStrings` for every other combination.
pub fn eval_addition(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(mut a), Value::String(b)) => {
            a.push_str(&b);
            Ok(Value::String(a))
        },
        _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { operator: operator.clone() }),
    }
}
