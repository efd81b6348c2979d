use crate::interpreter::{
    evaluator::{core::EvalResult, utils::check_number_operands},
    token::Token,
    value::core::Value,
};

/// Evaluates a relational comparison of the form `Value <Operator> Value`.
///
/// Both operands must be numbers; `compare` receives them in order and
/// decides the result with ordinary IEEE-754 semantics, so any comparison
/// involving `NaN` is false.
///
/// # Parameters
/// - `operator`: The operator token, for error reporting.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `compare`: The numeric predicate for the operator.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean result.
pub fn eval_comparison(operator: &Token,
                       left: &Value,
                       right: &Value,
                       compare: fn(f64, f64) -> bool)
                       -> EvalResult<Value> {
    let (left, right) = check_number_operands(operator, left, right)?;
    Ok(Value::Bool(compare(left, right)))
}
