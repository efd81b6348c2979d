use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::core::Value},
};

/// Requires the operand of a unary operator to be a number.
///
/// # Parameters
/// - `operator`: The operator token, kept for error reporting.
/// - `operand`: The evaluated operand.
///
/// # Returns
/// The number inside `operand`.
///
/// # Errors
/// `OperandMustBeNumber` for any other variant.
pub fn check_number_operand(operator: &Token, operand: &Value) -> EvalResult<f64> {
    operand.as_number()
           .ok_or_else(|| RuntimeError::OperandMustBeNumber { operator: operator.clone() })
}

/// Requires both operands of a binary operator to be numbers.
///
/// # Errors
/// `OperandsMustBeNumbers` if either operand is not a number.
pub fn check_number_operands(operator: &Token,
                             left: &Value,
                             right: &Value)
                             -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: operator.clone() }),
    }
}
