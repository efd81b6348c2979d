/// Binary operator evaluation logic.
///
/// Handles every binary operation in expressions: arithmetic, string
/// concatenation, comparison and equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and statement execution.
///
/// Contains the expression evaluator, the `Interpreter` that executes
/// statements and writes printed values, and the runtime error boundary.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides the operand type checks shared by the operator modules.
pub mod utils;
